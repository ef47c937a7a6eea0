//! Infrastructure layer - external integrations and utilities.
//!
//! This module contains code that interfaces with external systems:
//! - Traits the GUI toolkit implements (windows, dialogs, timers)
//! - Logging setup
//! - Error types

pub mod error;
pub mod host;
pub mod logging;
