//! Infrastructure adapters for twinstack.
//!
//! This crate implements the ports defined in
//! `twinstack-core::application::ports`. It contains all I/O: the real and
//! in-memory filesystems, and the real and recording process runners.

pub mod filesystem;
pub mod process;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use process::{RecordingProcessRunner, SystemProcessRunner};
