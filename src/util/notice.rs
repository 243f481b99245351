//! Blocking user notices.

pub const SESSION_EXPIRED_NOTICE: &str = "Session expired";
pub const NO_SUBMISSION_NOTICE: &str = "No submission found";

/// Show a modal alert. Outside the browser the message is only logged.
pub fn alert(message: &str) {
    log::info!("notice: {message}");
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            if window.alert_with_message(message).is_err() {
                log::warn!("alert could not be shown");
            }
        }
    }
}
