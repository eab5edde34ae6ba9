//! Application layer for twinstack.
//!
//! This layer contains:
//! - **Services**: the bootstrap sequence (`FullstackService`)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Events**: progress milestones reported to observers
//! - **Errors**: failures of the orchestrated side effects
//!
//! The application layer sequences side effects but performs none itself.

pub mod error;
pub mod events;
pub mod ports;
pub mod services;

pub use services::{FullstackService, ScaffoldReport};

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, NoopObserver, ProcessRunner, ScaffoldObserver};

pub use error::ApplicationError;
pub use events::ScaffoldEvent;
