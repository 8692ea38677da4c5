//! Data model and data-shaping logic for the creator analytics dashboard.
//!
//! Everything here is browser-free so it can be exercised with plain
//! `cargo test`; the Yew frontend only renders what these functions return.

pub mod aggregate;
pub mod error;
pub mod format;
pub mod media_kit;
pub mod models;
pub mod period;
pub mod timeframe;
pub mod videos;

pub use error::CoreError;
pub use models::{ChannelInfo, ChannelStats, DailyStat, RefreshResponse, Video};
pub use timeframe::{DateRange, Metric, Timeframe};
