//! Application services - orchestrate use cases.

pub mod fullstack_service;

pub use fullstack_service::{FullstackService, ScaffoldReport};
