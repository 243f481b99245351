use super::*;

#[test]
fn api_error_message_hides_auth_statuses() {
    assert_eq!(ApiError::Status(401).message(), "You are not allowed to view this.");
    assert_eq!(ApiError::Status(403).message(), "You are not allowed to view this.");
}

#[test]
fn api_error_message_falls_back_to_display() {
    assert_eq!(ApiError::Status(500).message(), "server responded with status 500");
    assert_eq!(ApiError::Transport("offline".to_owned()).message(), "request failed: offline");
}

#[test]
fn download_error_always_maps_to_no_submission_notice() {
    assert_eq!(DownloadError::UnknownPairing(9).notice(), "No submission found");
    assert_eq!(DownloadError::Api(ApiError::Status(404)).notice(), "No submission found");
}

#[test]
fn download_error_wraps_api_error_transparently() {
    let err = DownloadError::from(ApiError::Status(404));
    assert_eq!(err.to_string(), "server responded with status 404");
}
