//! Version from a text file, optionally narrowed by a regular expression

use crate::plugin::error::{VersionError, VersionResult};
use regex::{Captures, Regex, RegexBuilder};
use std::path::Path;

/// Named capture group that takes precedence when it matched something
pub const VERSION_GROUP: &str = "version";

/// Read `path` (relative paths resolve against `root`) and extract the version.
pub fn resolve_file_version(
    root: &Path,
    path: &Path,
    pattern: Option<&str>,
) -> VersionResult<String> {
    let full_path = root.join(path);
    if !full_path.is_file() {
        return Err(VersionError::FileNotFound {
            what: "Version".to_string(),
            path: path.to_path_buf(),
        });
    }

    let contents = std::fs::read_to_string(&full_path)
        .map_err(|e| VersionError::io("reading version file", &full_path, e))?;

    extract_version(&contents, pattern, path)
}

/// Extract the version from file contents.
///
/// Without a pattern the whole contents are used. With one, the first match
/// supplies the version: the `version` group when it matched non-empty text,
/// else the first positional group when the pattern has one, else the whole
/// match.
pub fn extract_version(
    contents: &str,
    pattern: Option<&str>,
    path: &Path,
) -> VersionResult<String> {
    let raw = match pattern {
        None => contents,
        Some(pattern) => {
            let regex = compile_pattern(pattern)?;
            let captures = regex.captures(contents).ok_or_else(|| VersionError::NoMatch {
                pattern: pattern.to_string(),
                path: path.to_path_buf(),
            })?;
            select_capture(&regex, &captures)
        }
    };

    let version = raw.trim();
    if version.is_empty() {
        return Err(VersionError::EmptyVersion {
            origin: format!("file {}", path.display()),
        });
    }
    Ok(version.to_string())
}

/// Compile a `match` option in multi-line mode
pub fn compile_pattern(pattern: &str) -> VersionResult<Regex> {
    RegexBuilder::new(pattern)
        .multi_line(true)
        .build()
        .map_err(|source| VersionError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })
}

fn select_capture<'h>(regex: &Regex, captures: &Captures<'h>) -> &'h str {
    if let Some(named) = captures
        .name(VERSION_GROUP)
        .map(|m| m.as_str())
        .filter(|s| !s.is_empty())
    {
        return named;
    }
    // group 0 is the whole match
    if regex.captures_len() > 1 {
        return captures.get(1).map_or("", |m| m.as_str());
    }
    captures.get(0).map_or("", |m| m.as_str())
}
