//! Mode-aware build configuration for front-end bundling pipelines.
//!
//! The build mode is resolved once from `NODE_ENV` at the entry point and
//! passed into [`crate::core::select_config`], a pure function producing the
//! configuration value handed to the external bundler.

pub mod cli;
pub mod core;
pub mod utils;
