//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `twinstack-adapters` implement
//! the driven ports; the CLI implements the observer.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: directory creation and the manifest write
//!   - `ProcessRunner`: package manager and generator invocations
//!   - `ScaffoldObserver`: progress events for the user interface

pub mod output;

pub use output::{Filesystem, NoopObserver, ProcessRunner, ScaffoldObserver};
