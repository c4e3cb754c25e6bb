//! # siteaudit-core - Core Domain Types
//!
//! Foundation crate for SiteAudit. Provides the scan result model, URL
//! normalization, score presentation helpers, error handling, and logging.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, tracing, url).
//!
//! ## Public API
//!
//! ### Scan Model (`scan`)
//! - [`ScanResult`] - Outcome of one scan: normalized URL, summary, issues
//! - [`ScanSummary`] - Error/warning/passed counts and an overall score
//! - [`Issue`] - A single accessibility finding
//! - [`IssueKind`], [`Impact`] - Finding type and severity tier
//!
//! ### Scan Targets (`target`)
//! - [`normalize_url()`] - Prefix a default secure scheme when none is present
//! - [`has_known_scheme()`] - Check for an `http://` or `https://` prefix
//!
//! ### Scores (`score`)
//! - [`score_label()`], [`score_tone()`] - Map a score to a label and tone
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use siteaudit_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod scan;
pub mod score;
pub mod target;

/// Prelude for common imports used throughout all SiteAudit crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result, ResultExt, SCAN_FAILED_MESSAGE};
pub use scan::{
    sample_issues, Impact, Issue, IssueKind, ScanResult, ScanSummary, ERRORS_RANGE, PASSED_RANGE,
    SCORE_RANGE, WARNINGS_RANGE,
};
pub use score::{score_label, score_tone, ScoreTone, GOOD_THRESHOLD, NEEDS_WORK_THRESHOLD};
pub use target::{display_host, has_known_scheme, normalize_url, DEFAULT_SCHEME, KNOWN_SCHEMES};
