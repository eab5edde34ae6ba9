//! twinstack Core - Hexagonal Architecture Implementation
//!
//! Domain and application layers for the twinstack bootstrapper: a project
//! root with a `package.json`, a generated client application and an empty
//! API directory.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          twinstack-cli (CLI)            │
//! │   (config, output, ScaffoldObserver)    │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │           (FullstackService)            │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Application Ports (Traits)        │
//! │      (Filesystem, ProcessRunner)        │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   twinstack-adapters (Infrastructure)   │
//! │ (LocalFilesystem, SystemProcessRunner)  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use twinstack_core::prelude::*;
//!
//! let cwd = std::env::current_dir().unwrap();
//! let layout = ProjectLayout::resolve(&cwd, "my-app").unwrap();
//!
//! let service = FullstackService::new(filesystem, runner, Toolchain::default());
//! service.scaffold(&layout, &NoopObserver).unwrap();
//! ```

pub mod application;
pub mod domain;
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        FullstackService, NoopObserver, ScaffoldEvent, ScaffoldReport,
        ports::{Filesystem, ProcessRunner, ScaffoldObserver},
    };
    pub use crate::domain::{CommandLine, ProjectLayout, ProjectManifest, Toolchain};
    pub use crate::error::{ScaffoldError, ScaffoldResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
