use crate::utils::{clear_query_params, get_query_param, store, CHANNEL_ID_KEY};

/// Channel id handed back by the backend's OAuth redirect, if the redirect succeeded.
pub fn auth_redirect_channel(auth_success: Option<&str>, channel_id: Option<&str>) -> Option<String> {
    match (auth_success, channel_id) {
        (Some("true"), Some(id)) if !id.trim().is_empty() => Some(id.trim().to_string()),
        _ => None,
    }
}

/// Saves the freshly authorised channel as the logged-in one and scrubs the
/// redirect parameters from the address bar.
pub fn consume_auth_redirect() -> Option<String> {
    let auth_success = get_query_param("auth_success");
    let channel_id = get_query_param("channel_id");
    let channel_id = auth_redirect_channel(auth_success.as_deref(), channel_id.as_deref())?;

    if let Err(e) = store(CHANNEL_ID_KEY, &channel_id) {
        log::error!("{e}");
    }
    clear_query_params();
    log::info!("Authorised channel {channel_id}");

    Some(channel_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_successful_redirects_yield_a_channel() {
        assert_eq!(
            auth_redirect_channel(Some("true"), Some("UC123")),
            Some("UC123".to_string())
        );
        assert_eq!(auth_redirect_channel(Some("false"), Some("UC123")), None);
        assert_eq!(auth_redirect_channel(Some("true"), Some("  ")), None);
        assert_eq!(auth_redirect_channel(None, Some("UC123")), None);
    }
}
