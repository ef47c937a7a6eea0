//! Services layer - business operations and utilities.
//!
//! This module contains business logic and operations:
//! - Settings persistence
//! - Text and file operations
//! - File dialog filters

pub mod file_filters;
pub mod settings_store;
pub mod text_ops;
