//! Filesystem utilities for amur.
//!
//! Generated files are written atomically so an interrupted run never leaves
//! a half-written file at its final path.

pub mod atomic;

pub use atomic::{atomic_write, ensure_dir};
