//! Project manifest (`pyproject.toml`) loading

use super::package::PackageFacts;
use super::version_config::VersionConfig;
use crate::plugin::error::{VersionError, VersionResult};
use std::path::{Path, PathBuf};

pub const MANIFEST_FILE_NAME: &str = "pyproject.toml";

/// A parsed project manifest and the location it was read from
#[derive(Debug, Clone)]
pub struct Manifest {
    path: PathBuf,
    data: toml::Table,
}

impl Manifest {
    /// Read and parse a manifest file
    pub fn load(path: &Path) -> VersionResult<Self> {
        if !path.is_file() {
            return Err(VersionError::Manifest {
                path: path.to_path_buf(),
                message: "file does not exist".to_string(),
            });
        }
        let contents = std::fs::read_to_string(path)
            .map_err(|e| VersionError::io("reading manifest", path, e))?;
        Self::parse(path, &contents)
    }

    /// Parse manifest text that was read from `path`
    pub fn parse(path: &Path, contents: &str) -> VersionResult<Self> {
        let data = toml::from_str::<toml::Table>(contents).map_err(|e| VersionError::Manifest {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        log::debug!("Loaded manifest {}", path.display());
        Ok(Self::from_table(path, data))
    }

    pub fn from_table(path: impl Into<PathBuf>, data: toml::Table) -> Self {
        Self {
            path: path.into(),
            data,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory relative paths in the configuration are resolved against
    pub fn project_root(&self) -> PathBuf {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }

    pub fn version_config(&self) -> VersionResult<Option<VersionConfig>> {
        VersionConfig::from_manifest_table(&self.data)
    }

    pub fn package_facts(&self) -> VersionResult<PackageFacts> {
        PackageFacts::from_manifest_table(&self.data)
    }
}
