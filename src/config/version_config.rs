//! `[tool.poetry-version]` section reader
//!
//! Turns the raw TOML section into a typed `VersionConfig`. An absent section
//! means the plugin is not enabled for the project; anything present but
//! unusable is a configuration error.

use crate::plugin::error::{VersionError, VersionResult};
use std::fmt;
use std::path::PathBuf;

/// Name of the plugin's table under `[tool]`
pub const CONFIG_SECTION: &str = "poetry-version";

/// Which strategy resolves the version, with its strategy-specific options
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionSource {
    /// `__version__` literal in the package's `__init__.py`
    Init,
    /// Exact git tag on HEAD
    GitTag,
    /// Contents of a text file, optionally narrowed by a regular expression
    File {
        path: PathBuf,
        pattern: Option<String>,
    },
}

impl VersionSource {
    /// The `source` value that selects this strategy
    pub fn name(&self) -> &'static str {
        match self {
            VersionSource::Init => "init",
            VersionSource::GitTag => "git-tag",
            VersionSource::File { .. } => "file",
        }
    }
}

impl fmt::Display for VersionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionConfig {
    pub source: VersionSource,
}

impl VersionConfig {
    /// Read the plugin section from a parsed manifest.
    ///
    /// Returns `Ok(None)` when `[tool.poetry-version]` is missing or empty.
    pub fn from_manifest_table(manifest: &toml::Table) -> VersionResult<Option<Self>> {
        let section = manifest
            .get("tool")
            .and_then(|tool| tool.as_table())
            .and_then(|tool| tool.get(CONFIG_SECTION));

        let section = match section {
            None => return Ok(None),
            Some(value) => value.as_table().ok_or_else(|| {
                VersionError::configuration(format!(
                    "[tool.{}] must be a table, found {}",
                    CONFIG_SECTION,
                    value.type_str()
                ))
            })?,
        };
        if section.is_empty() {
            return Ok(None);
        }

        Self::from_section(section).map(Some)
    }

    /// Build a config from the contents of the plugin section itself
    pub fn from_section(section: &toml::Table) -> VersionResult<Self> {
        let source = match optional_string(section, "source")? {
            None => {
                return Err(VersionError::configuration(format!(
                    "No source configuration found in [tool.{}]",
                    CONFIG_SECTION
                )))
            }
            Some(s) if s.trim().is_empty() => {
                return Err(VersionError::configuration("source must not be empty"))
            }
            Some(s) => s,
        };

        let source = match source {
            "init" => VersionSource::Init,
            "git-tag" => VersionSource::GitTag,
            "file" => {
                let path = optional_string(section, "path")?
                    .filter(|p| !p.trim().is_empty())
                    .ok_or_else(|| {
                        VersionError::configuration("source = \"file\" requires a path option")
                    })?;
                let pattern = optional_string(section, "match")?.map(str::to_string);
                VersionSource::File {
                    path: PathBuf::from(path),
                    pattern,
                }
            }
            other => {
                return Err(VersionError::configuration(format!(
                    "unsupported source '{}' (expected one of: init, git-tag, file)",
                    other
                )))
            }
        };

        for key in section.keys() {
            if !matches!(key.as_str(), "source" | "path" | "match") {
                log::warn!("Ignoring unknown key '{}' in [tool.{}]", key, CONFIG_SECTION);
            }
        }

        Ok(VersionConfig { source })
    }
}

fn optional_string<'a>(section: &'a toml::Table, key: &str) -> VersionResult<Option<&'a str>> {
    match section.get(key) {
        None => Ok(None),
        Some(value) => value.as_str().map(Some).ok_or_else(|| {
            VersionError::configuration(format!(
                "{} must be a string, found {}",
                key,
                value.type_str()
            ))
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(toml_text: &str) -> VersionResult<Option<VersionConfig>> {
        let table: toml::Table = toml_text.parse().unwrap();
        VersionConfig::from_manifest_table(&table)
    }

    fn config_message(result: VersionResult<Option<VersionConfig>>) -> String {
        match result {
            Err(VersionError::Configuration { message }) => message,
            other => panic!("Expected configuration error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_section_is_inactive() {
        assert_eq!(parse("[tool.poetry]\nname = \"demo\"\n").unwrap(), None);
        assert_eq!(parse("").unwrap(), None);
    }

    #[test]
    fn test_empty_section_is_inactive() {
        assert_eq!(parse("[tool.poetry-version]\n").unwrap(), None);
    }

    #[test]
    fn test_init_and_git_tag_sources() {
        let init = parse("[tool.poetry-version]\nsource = \"init\"\n").unwrap().unwrap();
        assert_eq!(init.source, VersionSource::Init);

        let git = parse("[tool.poetry-version]\nsource = \"git-tag\"\n").unwrap().unwrap();
        assert_eq!(git.source, VersionSource::GitTag);
        assert_eq!(git.source.to_string(), "git-tag");
    }

    #[test]
    fn test_file_source_with_match() {
        let config = parse(
            "[tool.poetry-version]\nsource = \"file\"\npath = \"VERSION\"\nmatch = '^(\\d+)'\n",
        )
        .unwrap()
        .unwrap();
        assert_eq!(
            config.source,
            VersionSource::File {
                path: PathBuf::from("VERSION"),
                pattern: Some("^(\\d+)".to_string()),
            }
        );
    }

    #[test]
    fn test_file_source_requires_path() {
        let message = config_message(parse("[tool.poetry-version]\nsource = \"file\"\n"));
        assert!(message.contains("requires a path"), "got: {}", message);
    }

    #[test]
    fn test_missing_source_is_error() {
        let message = config_message(parse("[tool.poetry-version]\npath = \"VERSION\"\n"));
        assert!(message.contains("No source configuration"), "got: {}", message);
    }

    #[test]
    fn test_empty_source_is_error() {
        let message = config_message(parse("[tool.poetry-version]\nsource = \"  \"\n"));
        assert!(message.contains("must not be empty"));
    }

    #[test]
    fn test_unsupported_source_is_error() {
        let message = config_message(parse("[tool.poetry-version]\nsource = \"svn\"\n"));
        assert!(message.contains("unsupported source 'svn'"));
    }

    #[test]
    fn test_source_names_are_exact() {
        let message = config_message(parse("[tool.poetry-version]\nsource = \" init \"\n"));
        assert!(message.contains("unsupported source ' init '"), "got: {}", message);

        let message = config_message(parse("[tool.poetry-version]\nsource = \"Git-Tag\"\n"));
        assert!(message.contains("unsupported source 'Git-Tag'"), "got: {}", message);
    }

    #[test]
    fn test_non_string_values_are_rejected() {
        let message = config_message(parse("[tool.poetry-version]\nsource = 3\n"));
        assert!(message.contains("source must be a string"), "got: {}", message);

        let message = config_message(parse(
            "[tool.poetry-version]\nsource = \"file\"\npath = \"VERSION\"\nmatch = true\n",
        ));
        assert!(message.contains("match must be a string"), "got: {}", message);
    }

    #[test]
    fn test_section_must_be_table() {
        let message = config_message(parse("[tool]\npoetry-version = \"init\"\n"));
        assert!(message.contains("must be a table"));
    }
}
