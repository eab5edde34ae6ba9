//! Command handlers, one per top-level mode.

pub mod completions;
pub mod create;
pub mod show_config;
