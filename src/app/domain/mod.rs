//! Domain layer - core data structures and types.
//!
//! This module contains the fundamental domain models:
//! - Editor sessions and their formatting
//! - Application settings and the recent files list
//! - Message types for the event system

pub mod color;
pub mod messages;
pub mod session;
pub mod settings;

pub use color::{ColorTarget, Rgb};
pub use messages::{EditCommand, Message, WindowId};
pub use session::{EditorSession, Formatting, Guard, SessionEvent};
pub use settings::{AppSettings, RecentFiles};
