//! siteaudit-tui - Terminal UI for SiteAudit
//!
//! This crate provides the ratatui-based terminal interface. It creates an
//! Engine from siteaudit-app and adds terminal rendering, event polling, and
//! widget display.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run;
