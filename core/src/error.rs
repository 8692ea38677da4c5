use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum CoreError {
    #[error("invalid date '{value}': expected YYYY-MM-DD")]
    InvalidDate { value: String },

    #[error("invalid month key '{value}': expected YYYY-MM")]
    InvalidMonth { value: String },

    #[error("unknown {kind} '{value}'")]
    UnknownKey { kind: &'static str, value: String },
}
