//! Result type aliases.

use super::context::ErrorContext;
use super::wan_error::WanError;

/// Type alias for Results using WanError.
pub type WanResult<T> = Result<T, WanError>;

/// Extension trait for Result types to add context to errors.
pub trait ResultExt<T> {
    /// Add context to an error if the result is Err.
    fn context(self, ctx: ErrorContext) -> WanResult<T>;

    /// Add context using a closure (only called on error).
    fn with_context<F>(self, f: F) -> WanResult<T>
    where
        F: FnOnce() -> ErrorContext;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<WanError>,
{
    fn context(self, ctx: ErrorContext) -> WanResult<T> {
        self.map_err(|e| e.into().with_context(ctx))
    }

    fn with_context<F>(self, f: F) -> WanResult<T>
    where
        F: FnOnce() -> ErrorContext,
    {
        self.map_err(|e| e.into().with_context(f()))
    }
}
