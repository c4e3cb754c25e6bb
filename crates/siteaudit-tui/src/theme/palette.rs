//! Color palette for the SiteAudit TUI.

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Black; // Terminal background
pub const CARD_BG: Color = Color::Black; // Panel/card backgrounds
pub const POPUP_BG: Color = Color::Rgb(28, 33, 43); // Modal/popup backgrounds

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray;
pub const BORDER_ACTIVE: Color = Color::Cyan;

// --- Accent ---
pub const ACCENT: Color = Color::Cyan;
pub const CONTRAST_FG: Color = Color::Black; // Text on accent backgrounds

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;

// --- Status ---
pub const STATUS_GREEN: Color = Color::Green; // Good score, passed checks
pub const STATUS_RED: Color = Color::Red; // Errors, poor score
pub const STATUS_YELLOW: Color = Color::Yellow; // Warnings, needs-work score

// --- Impact badges ---
pub const IMPACT_CRITICAL: Color = Color::LightRed;
pub const IMPACT_SERIOUS: Color = Color::Red;
pub const IMPACT_MODERATE: Color = Color::Yellow;
pub const IMPACT_MINOR: Color = Color::Blue;
