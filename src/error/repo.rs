//! The single-message error that crosses the repository boundary.

use thiserror::Error;

use super::wan_error::WanError;

/// Fallback text when a failure carries no message at all.
pub const DEFAULT_FAILURE_MESSAGE: &str = "Failed to load";

/// A failure as seen by a view-state controller: one display message.
///
/// Structured codes stop at the repository; controllers only ever show
/// the message and offer a retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct RepoError {
    message: String,
}

impl RepoError {
    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            Self {
                message: DEFAULT_FAILURE_MESSAGE.to_string(),
            }
        } else {
            Self { message }
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn into_message(self) -> String {
        self.message
    }
}

impl From<WanError> for RepoError {
    fn from(err: WanError) -> Self {
        RepoError::new(err.user_message())
    }
}

/// Outcome of a repository call.
pub type RepoResult<T> = Result<T, RepoError>;
