//! Rendering of the resolved version on stdout

use crate::plugin::api::ResolvedVersion;
use serde::Serialize;

#[derive(Serialize)]
struct JsonReport<'a> {
    name: Option<&'a str>,
    version: &'a str,
    source: &'a str,
}

/// Text output is the bare version; JSON adds the package name and source
pub fn render_resolved(
    resolved: &ResolvedVersion,
    package_name: Option<&str>,
    json: bool,
) -> Result<String, serde_json::Error> {
    if !json {
        return Ok(resolved.version.clone());
    }
    serde_json::to_string(&JsonReport {
        name: package_name,
        version: &resolved.version,
        source: resolved.source,
    })
}
