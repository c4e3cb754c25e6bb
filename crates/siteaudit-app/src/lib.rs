//! siteaudit-app - Application state and orchestration for SiteAudit
//!
//! This crate implements the TEA (The Elm Architecture) pattern for the scan
//! form and report capture flow: a state struct, a message enum, and a pure
//! `update` function. The only asynchronous step, the scan itself, is run by
//! the [`Engine`] through the injectable [`Scanner`] collaborator.

pub mod actions;
pub mod config;
pub mod email;
pub mod engine;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod scanner;
pub mod signals;
pub mod state;

// Re-export primary types
pub use engine::Engine;
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use scanner::{LocalScanner, Scanner, SimulatedScanner};
pub use state::AppState;
