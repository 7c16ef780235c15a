//! HTTP error mapping shared by the hosted provider adapters.

use reqwest::{Response, StatusCode};
use std::time::Duration;

use crate::ports::AIError;

/// Seconds to wait when a 429 carries no usable hint.
const DEFAULT_RETRY_AFTER_SECS: u32 = 30;

/// Converts a transport failure into an `AIError`.
pub(super) fn map_send_error(err: reqwest::Error, timeout: Duration) -> AIError {
    if err.is_timeout() {
        AIError::Timeout {
            timeout_secs: timeout.as_secs() as u32,
        }
    } else if err.is_connect() {
        AIError::network(format!("Connection failed: {}", err))
    } else {
        AIError::network(err.to_string())
    }
}

/// Passes successful responses through and turns the rest into errors.
pub(super) async fn check_status(response: Response) -> Result<Response, AIError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let retry_after = response
        .headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<u32>().ok());
    let body = response.text().await.unwrap_or_default();

    Err(error_for_status(status, retry_after, &body))
}

/// Maps a non-success status to the matching `AIError`.
pub(super) fn error_for_status(status: StatusCode, retry_after: Option<u32>, body: &str) -> AIError {
    match status.as_u16() {
        401 | 403 => AIError::AuthenticationFailed,
        429 => AIError::rate_limited(retry_after.unwrap_or(DEFAULT_RETRY_AFTER_SECS)),
        400 | 404 | 422 => AIError::InvalidRequest(body.to_string()),
        500..=599 => AIError::unavailable(format!("Server error {}: {}", status, body)),
        _ => AIError::network(format!("Unexpected status {}: {}", status, body)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_statuses_map_to_authentication_failed() {
        assert!(matches!(
            error_for_status(StatusCode::UNAUTHORIZED, None, ""),
            AIError::AuthenticationFailed
        ));
        assert!(matches!(
            error_for_status(StatusCode::FORBIDDEN, None, ""),
            AIError::AuthenticationFailed
        ));
    }

    #[test]
    fn rate_limit_uses_header_or_default() {
        assert!(matches!(
            error_for_status(StatusCode::TOO_MANY_REQUESTS, Some(12), ""),
            AIError::RateLimited { retry_after_secs: 12 }
        ));
        assert!(matches!(
            error_for_status(StatusCode::TOO_MANY_REQUESTS, None, ""),
            AIError::RateLimited { retry_after_secs: 30 }
        ));
    }

    #[test]
    fn server_errors_are_unavailable() {
        let err = error_for_status(StatusCode::SERVICE_UNAVAILABLE, None, "overloaded");
        assert!(matches!(err, AIError::Unavailable { .. }));
        assert!(err.is_transient());
    }

    #[test]
    fn bad_request_keeps_body() {
        match error_for_status(StatusCode::BAD_REQUEST, None, "bad schema") {
            AIError::InvalidRequest(body) => assert_eq!(body, "bad schema"),
            other => panic!("unexpected {:?}", other),
        }
    }
}
