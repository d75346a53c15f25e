//! Simple line-based CLI output utilities.

/// Line width for separators.
pub const LINE_WIDTH: usize = 60;

/// Print the main header.
///
/// ```text
/// HOME
/// ════════════════════════════════════════════════════════════
/// ```
pub fn print_header(title: &str) {
    println!();
    println!("{}", title);
    println!("{}", "═".repeat(LINE_WIDTH));
    println!();
}

/// Print a section title.
///
/// ```text
/// BANNERS (3)
/// ────────────────────────────────────────────────────────────
/// ```
pub fn print_section(title: &str) {
    println!("{}", title);
    println!("{}", "─".repeat(LINE_WIDTH));
}

/// Print a line within a section.
///
/// ```text
///   ✓ Loaded 20 articles
/// ```
pub fn print_step_line(icon: &str, message: &str) {
    println!("  {} {}", icon, message);
}

/// Print the end of a section (just a blank line).
pub fn print_section_end() {
    println!();
}

/// Print the footer with a one-line summary.
pub fn print_footer(icon: &str, summary: &str) {
    println!("{}", "═".repeat(LINE_WIDTH));
    println!("{} {}", icon, summary);
    println!("{}", "═".repeat(LINE_WIDTH));
}

/// Status icons
pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const FAILURE: &str = "✗";
    pub const WARNING: &str = "⚠";
    pub const BULLET: &str = "•";
    pub const PINNED: &str = "★";
    pub const LOADING: &str = "…";
}
