//! Public API for the plugin
//!
//! External modules should import from here rather than directly from internal modules.

// Plugin entry point
pub use crate::plugin::activation::{VersionPlugin, PLUGIN_NAME};

// Error handling
pub use crate::plugin::error::{VersionError, VersionResult};

// Plugin metadata and activation outcome
pub use crate::plugin::types::{ActivationState, PluginInfo, ResolvedVersion};

// Host seams and the bundled implementations
pub use crate::plugin::host::PackageModel;
pub use crate::plugin::io::{BufferedIo, ConsoleIo, LineKind};
pub use crate::plugin::traits::{PackageHost, Plugin, PluginIo};
