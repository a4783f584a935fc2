//! Plugin Module
//!
//! The dynamic version plugin, the traits it uses to talk to its host build
//! tool, and its error type.

// Internal modules - all access should go through api module
pub(crate) mod activation;
pub(crate) mod error;
pub(crate) mod host;
pub(crate) mod io;
pub(crate) mod traits;
pub(crate) mod types;

// Public API module - the only public interface for the plugin
pub mod api;

#[cfg(test)]
mod error_tests;
