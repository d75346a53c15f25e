//! The three-state view lifecycle.

use std::fmt;

/// What a screen should render.
///
/// `Loading -> Success | Error`, and back to `Loading` on any new load.
/// There is no terminal state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Loading,
    Success,
    /// Carries the message to display with a retry action.
    Error(String),
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, LoadState::Success)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, LoadState::Error(_))
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            LoadState::Error(message) => Some(message),
            _ => None,
        }
    }
}

impl fmt::Display for LoadState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadState::Loading => write!(f, "loading"),
            LoadState::Success => write!(f, "success"),
            LoadState::Error(message) => write!(f, "error: {}", message),
        }
    }
}
