//! In-memory package model

use super::traits::PackageHost;

/// Minimal package model: a name and the version set during activation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageModel {
    pub name: Option<String>,
    pub version: Option<String>,
}

impl PackageModel {
    pub fn new(name: Option<String>) -> Self {
        Self {
            name,
            version: None,
        }
    }
}

impl PackageHost for PackageModel {
    fn package_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn set_version(&mut self, version: &str) {
        if let Some(previous) = &self.version {
            log::debug!("Replacing package version {} with {}", previous, version);
        }
        self.version = Some(version.to_string());
    }
}
