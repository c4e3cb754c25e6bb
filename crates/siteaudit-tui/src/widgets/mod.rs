//! Custom widget components

mod email_capture;
mod header;
mod key_hints;
mod landing;
pub mod modal_overlay;
mod results;
mod scan_form;
mod text_field;

pub use email_capture::{AcknowledgmentPopup, ReportCallout};
pub use header::MainHeader;
pub use key_hints::KeyHints;
pub use landing::Landing;
pub use results::ResultsPanel;
pub use scan_form::ScanForm;
pub use text_field::TextField;
