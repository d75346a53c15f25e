//! Error handling for the client.
//!
//! Three layers, narrowing as they move up:
//!
//! - [`HttpError`](crate::traits::HttpError) at the HTTP trait seam
//! - [`WanError`] for a whole API call: transport ([`NetworkError`]),
//!   application (`errorCode != 0`), decoding, missing payload
//! - [`RepoError`] at the repository boundary: a single display message
//!
//! | Category | Description | Retryable |
//! |----------|-------------|-----------|
//! | Network | Connection, timeout, rate limit | Yes |
//! | Server | HTTP 5xx, `errorCode != 0` | Yes |
//! | Client | Undecodable or empty response | No |

mod category;
mod context;
mod network;
mod repo;
mod result;
mod wan_error;

pub use category::ErrorCategory;
pub use context::ErrorContext;
pub use network::NetworkError;
pub use repo::{RepoError, RepoResult, DEFAULT_FAILURE_MESSAGE};
pub use result::{ResultExt, WanResult};
pub use wan_error::WanError;
