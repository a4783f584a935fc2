//! Package facts read from `[tool.poetry]`
//!
//! The init strategy needs the distribution name and the declared package
//! includes to find the module that holds `__version__`.

use crate::plugin::error::{VersionError, VersionResult};
use std::path::PathBuf;

/// One entry of `[tool.poetry] packages`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageInclude {
    pub include: String,
    pub from: Option<String>,
}

impl PackageInclude {
    pub fn new(include: impl Into<String>) -> Self {
        Self {
            include: include.into(),
            from: None,
        }
    }

    pub fn with_from(mut self, from: impl Into<String>) -> Self {
        self.from = Some(from.into());
        self
    }

    /// Package directory relative to the project root
    pub fn module_dir(&self) -> PathBuf {
        match &self.from {
            Some(from) => PathBuf::from(from).join(&self.include),
            None => PathBuf::from(&self.include),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageFacts {
    /// Distribution name
    pub name: Option<String>,
    pub packages: Vec<PackageInclude>,
}

impl PackageFacts {
    /// Extract the facts from a parsed manifest.
    ///
    /// The name comes from `[tool.poetry] name`, falling back to `[project] name`.
    pub fn from_manifest_table(manifest: &toml::Table) -> VersionResult<Self> {
        let poetry = manifest
            .get("tool")
            .and_then(|tool| tool.as_table())
            .and_then(|tool| tool.get("poetry"))
            .and_then(|poetry| poetry.as_table());

        let name = poetry
            .and_then(|p| p.get("name"))
            .or_else(|| {
                manifest
                    .get("project")
                    .and_then(|project| project.as_table())
                    .and_then(|project| project.get("name"))
            })
            .and_then(|v| v.as_str())
            .map(str::to_string);

        let packages = match poetry.and_then(|p| p.get("packages")) {
            None => Vec::new(),
            Some(value) => {
                let entries = value.as_array().ok_or_else(|| {
                    VersionError::configuration("[tool.poetry] packages must be an array")
                })?;
                entries
                    .iter()
                    .enumerate()
                    .map(|(index, entry)| parse_package_entry(index, entry))
                    .collect::<VersionResult<Vec<_>>>()?
            }
        };

        Ok(PackageFacts { name, packages })
    }
}

fn parse_package_entry(index: usize, entry: &toml::Value) -> VersionResult<PackageInclude> {
    let table = entry.as_table().ok_or_else(|| {
        VersionError::configuration(format!(
            "[tool.poetry] packages entry {} must be a table",
            index
        ))
    })?;
    let include = table
        .get("include")
        .and_then(|v| v.as_str())
        .ok_or_else(|| {
            VersionError::configuration(format!(
                "[tool.poetry] packages entry {} has no string 'include'",
                index
            ))
        })?;
    let from = match table.get("from") {
        None => None,
        Some(v) => Some(v.as_str().map(str::to_string).ok_or_else(|| {
            VersionError::configuration(format!(
                "[tool.poetry] packages entry {} has a non-string 'from'",
                index
            ))
        })?),
    };

    Ok(PackageInclude {
        include: include.to_string(),
        from,
    })
}
