//! `__version__` from the package's `__init__.py`

use super::module_name::module_name;
use super::python::{find_string_assignment, ScanError};
use crate::config::package::PackageFacts;
use crate::plugin::error::{VersionError, VersionResult};
use std::path::{Path, PathBuf};

pub const INIT_FILE_NAME: &str = "__init__.py";
pub const VERSION_VARIABLE: &str = "__version__";

/// Locate the `__init__.py` holding the version, relative to `root`.
///
/// One declared package include is used as is; several are ambiguous and
/// rejected before anything is read. Without includes the module is named
/// after the distribution, with a `src/` layout accepted as fallback.
pub fn locate_init_file(root: &Path, facts: &PackageFacts) -> VersionResult<PathBuf> {
    let relative = match facts.packages.as_slice() {
        [] => {
            let name = facts.name.as_deref().ok_or_else(|| {
                VersionError::configuration(
                    "no packages declared and no package name to derive the module from",
                )
            })?;
            let module = PathBuf::from(module_name(name));
            let flat = module.join(INIT_FILE_NAME);
            let src = Path::new("src").join(&module).join(INIT_FILE_NAME);
            if !root.join(&flat).is_file() && root.join(&src).is_file() {
                log::debug!("Using src layout for module {}", module.display());
                src
            } else {
                flat
            }
        }
        [package] => package.module_dir().join(INIT_FILE_NAME),
        packages => {
            return Err(VersionError::AmbiguousPackage {
                count: packages.len(),
            })
        }
    };

    if !root.join(&relative).is_file() {
        return Err(VersionError::FileNotFound {
            what: INIT_FILE_NAME.to_string(),
            path: relative,
        });
    }
    Ok(relative)
}

/// Read `__version__` from an `__init__.py` without executing it.
///
/// `display_path` is the path used in error messages.
pub fn read_init_version(file: &Path, display_path: &Path) -> VersionResult<String> {
    let source = std::fs::read_to_string(file)
        .map_err(|e| VersionError::io("reading __init__.py", file, e))?;

    let version = find_string_assignment(&source, VERSION_VARIABLE)
        .map_err(|e| match e {
            ScanError::Syntax(position) => VersionError::Syntax {
                path: display_path.to_path_buf(),
                line: position.line,
                column: position.column,
            },
            ScanError::Parser(message) => VersionError::Parser { message },
        })?
        .ok_or_else(|| VersionError::VersionNotFound {
            path: display_path.to_path_buf(),
        })?;

    if version.trim().is_empty() {
        return Err(VersionError::EmptyVersion {
            origin: format!("{} in {}", VERSION_VARIABLE, display_path.display()),
        });
    }
    Ok(version)
}
