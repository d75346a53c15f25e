//! List view-state controllers.
//!
//! Every screen is built from the same pieces:
//!
//! ```text
//! PageSource ──→ ListController ──watch──→ presenter
//!                  │
//!                  └─ Pager (pure state machine)
//! ```
//!
//! ## Components
//!
//! - [`LoadState`]: `Loading | Success | Error(message)`
//! - [`Pager`]: cursor, items and request bookkeeping for one list
//! - [`ListController`]: async driver publishing [`ListSnapshot`]s
//! - [`TaskScope`]: aborts a controller's spawned work on dispose
//! - [`HomeScreen`], [`ProjectScreen`], [`SquareScreen`]: the three list screens

mod home;
mod lifecycle;
mod list;
mod load_state;
mod pager;
mod project;
mod square;

pub use home::{home_screen, HomeHead, HomeScreen};
pub use lifecycle::TaskScope;
pub use list::{FnSource, ListController, ListHandle, Listener, PageSource};
pub use load_state::LoadState;
pub use pager::{Chunk, ListSnapshot, Pager, Ticket};
pub use project::{ProjectMode, ProjectScreen, ProjectView};
pub use square::{SquareScreen, SquareTab, SquareView};
