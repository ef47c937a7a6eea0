//! Controllers layer - orchestration and coordination.
//!
//! - Window lifecycle, shared settings and recent files

pub mod windows;
