//! Repository adapters.
//!
//! Each repository method makes exactly one API call and collapses its
//! outcome into a [`RepoResult`]: the payload on `errorCode == 0`, otherwise
//! a single display message. Nothing above this layer sees a [`WanError`].

mod home;
mod project;
mod tree;

pub use home::HomeRepository;
pub use project::ProjectRepository;
pub use tree::TreeRepository;

use tracing::warn;

use crate::error::{RepoError, RepoResult, WanError, WanResult};
use crate::models::{ApiResponse, PagedEnvelope};

/// Unwrap an envelope, substituting `empty()` for a successful null payload.
fn unwrap_envelope<T>(
    operation: &str,
    result: WanResult<ApiResponse<T>>,
    empty: impl FnOnce() -> T,
) -> RepoResult<T> {
    let envelope = match result {
        Ok(envelope) => envelope,
        Err(err) => {
            warn!(
                operation,
                code = err.error_code(),
                error = %err,
                "Request failed"
            );
            return Err(RepoError::from(err));
        }
    };

    if !envelope.is_success() {
        let err = WanError::Api {
            code: envelope.error_code,
            message: envelope.error_msg,
        };
        warn!(operation, error = %err, "Server reported failure");
        return Err(RepoError::from(err));
    }

    Ok(envelope.data.unwrap_or_else(empty))
}

/// Unwrap a list envelope; a null `data` is an empty list.
pub(crate) fn unwrap_list<T>(
    operation: &str,
    result: WanResult<ApiResponse<Vec<T>>>,
) -> RepoResult<Vec<T>> {
    unwrap_envelope(operation, result, Vec::new)
}

/// Unwrap a paged envelope; a null `data` is an empty final page.
pub(crate) fn unwrap_page<T>(
    operation: &str,
    result: WanResult<ApiResponse<PagedEnvelope<T>>>,
) -> RepoResult<PagedEnvelope<T>> {
    unwrap_envelope(operation, result, PagedEnvelope::empty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{NetworkError, DEFAULT_FAILURE_MESSAGE};

    #[test]
    fn test_success_passes_data_through() {
        let result = unwrap_list("navigation", Ok(ApiResponse::success(vec![1, 2])));
        assert_eq!(result.unwrap(), vec![1, 2]);
    }

    #[test]
    fn test_null_data_is_empty() {
        let envelope = ApiResponse::<Vec<u8>> {
            data: None,
            error_code: 0,
            error_msg: String::new(),
        };
        assert!(unwrap_list("banners", Ok(envelope)).unwrap().is_empty());

        let envelope = ApiResponse::<PagedEnvelope<u8>> {
            data: None,
            error_code: 0,
            error_msg: String::new(),
        };
        let page = unwrap_page("square", Ok(envelope)).unwrap();
        assert!(page.is_empty());
        assert!(page.is_last_page);
    }

    #[test]
    fn test_error_code_surfaces_server_message() {
        let result = unwrap_list::<u8>("tree", Ok(ApiResponse::failure(-1, "服务器繁忙")));
        assert_eq!(result.unwrap_err().message(), "服务器繁忙");
    }

    #[test]
    fn test_error_code_without_message() {
        let result = unwrap_list::<u8>("tree", Ok(ApiResponse::failure(-1, "")));
        assert_eq!(result.unwrap_err().message(), "Request failed (code -1)");
    }

    #[test]
    fn test_transport_failure_becomes_message() {
        let err = WanError::from(NetworkError::Timeout {
            operation: "articles".to_string(),
            duration_secs: 30,
        });
        let result = unwrap_page::<u8>("articles", Err(err));
        let message = result.unwrap_err().into_message();
        assert!(message.contains("timed out"));
        assert_ne!(message, DEFAULT_FAILURE_MESSAGE);
    }
}
