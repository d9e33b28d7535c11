//! CLI command implementations.

pub mod get;
pub mod paths;
pub mod show;
