//! Plugin Trait System
//!
//! The seams between the plugin and its host build tool:
//!
//! - [`Plugin`]: what the host calls once per build
//! - [`PackageHost`]: the host's in-memory package model the version is written to
//! - [`PluginIo`]: the host's output channel for progress and error lines
//!
//! Plugins do not load manifests, discover other plugins or build artifacts.

use crate::config::manifest::Manifest;
use crate::plugin::error::VersionResult;
use crate::plugin::types::{PluginInfo, ResolvedVersion};

/// A build-time plugin activated once per build
pub trait Plugin {
    /// Get plugin metadata
    fn plugin_info(&self) -> PluginInfo;

    /// Run the plugin against the project described by `manifest`.
    ///
    /// Returns `Ok(None)` when the plugin is not configured for the project.
    fn activate(
        &self,
        manifest: &Manifest,
        host: &mut dyn PackageHost,
        io: &mut dyn PluginIo,
    ) -> VersionResult<Option<ResolvedVersion>>;
}

/// The host's package model
pub trait PackageHost {
    /// Distribution name, if the host knows it
    fn package_name(&self) -> Option<&str>;

    /// Record the resolved version
    fn set_version(&mut self, version: &str);
}

/// The host's output channel
pub trait PluginIo {
    /// Whether lines may carry ANSI styling
    fn is_decorated(&self) -> bool;

    fn write_line(&mut self, line: &str);

    fn write_error_line(&mut self, line: &str);
}
