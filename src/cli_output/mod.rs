//! CLI output utilities: headers, sections and one-line record renderings.

mod boxes;
mod listing;

pub use boxes::*;
pub use listing::*;
