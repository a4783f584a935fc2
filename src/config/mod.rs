//! Manifest and plugin configuration
//!
//! Loads `pyproject.toml` and extracts the two things the plugin reads from
//! it: the `[tool.poetry-version]` section and the package facts under
//! `[tool.poetry]`.

pub mod manifest;
pub mod package;
pub mod version_config;

pub use manifest::{Manifest, MANIFEST_FILE_NAME};
pub use package::{PackageFacts, PackageInclude};
pub use version_config::{VersionConfig, VersionSource, CONFIG_SECTION};
