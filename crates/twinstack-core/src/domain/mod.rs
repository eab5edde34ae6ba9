//! Domain layer: pure data describing one bootstrap run.
//!
//! Nothing here touches the filesystem or spawns processes.

pub mod error;
pub mod layout;
pub mod manifest;
pub mod toolchain;

pub use error::{DomainError, ErrorCategory};
pub use layout::{API_DIR_NAME, ProjectLayout};
pub use manifest::{INITIAL_VERSION, MANIFEST_FILE_NAME, ProjectManifest};
pub use toolchain::{CLIENT_SUFFIX, CommandLine, INSTALL_FLAGS, Toolchain};
