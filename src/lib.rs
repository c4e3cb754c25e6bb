//! SiteAudit - website accessibility checker
//!
//! The terminal UI lives in `siteaudit-tui`; this crate adds the headless
//! NDJSON runner used by scripts and the binary entry point.

pub mod headless;

// Re-export main entry points
pub use headless::runner::run_headless;
pub use siteaudit_tui::run;
