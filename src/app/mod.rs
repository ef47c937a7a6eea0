//! Application layer - organized by Clean Architecture principles.
//!
//! # Structure
//!
//! - `domain/` - Core data structures (EditorSession, Settings, Messages)
//! - `controllers/` - Orchestration (SessionController)
//! - `services/` - Business operations (settings store, text/file ops)
//! - `infrastructure/` - External seams (host traits, logging, error)

pub mod controllers;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-exports for convenient external access
pub use controllers::windows::{Lifecycle, SessionController};
pub use domain::{AppSettings, EditCommand, EditorSession, Message, WindowId};
pub use infrastructure::error::{AppError, Result};
pub use services::settings_store::SettingsStore;
