//! Distribution name to importable module name

use regex::Regex;
use std::sync::OnceLock;

fn separator_runs() -> &'static Regex {
    static SEPARATORS: OnceLock<Regex> = OnceLock::new();
    SEPARATORS.get_or_init(|| Regex::new(r"[-_.]+").expect("separator pattern is valid"))
}

/// Canonical form of a distribution name: separator runs become one `-`, lowercased.
pub fn canonicalize_name(name: &str) -> String {
    separator_runs().replace_all(name.trim(), "-").to_lowercase()
}

/// Module directory name derived from a distribution name.
///
/// `My.Cool-Package` becomes `my_cool_package`.
pub fn module_name(name: &str) -> String {
    canonicalize_name(name).replace('-', "_")
}
