//! Filesystem utilities for jobkit.
//!
//! State files and generated documents are written atomically so an
//! interrupted run never leaves a truncated pipeline behind.

pub mod atomic;

pub use atomic::atomic_write_file;
pub use atomic::write_if_missing;
