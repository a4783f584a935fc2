//! Tests for error chaining and classification of VersionError

#[cfg(test)]
mod tests {
    use super::super::error::*;
    use crate::core::error_handling::ContextualError;
    use std::error::Error;
    use std::io;
    use std::path::PathBuf;

    #[test]
    fn test_io_error_source_chain() {
        let io_error = io::Error::new(io::ErrorKind::PermissionDenied, "access denied");
        let error = VersionError::io("reading version file", "/protected/VERSION", io_error);

        let mut error_chain = Vec::new();
        let mut current_error: &dyn Error = &error;
        error_chain.push(current_error.to_string());
        while let Some(source) = current_error.source() {
            error_chain.push(source.to_string());
            current_error = source;
        }

        assert_eq!(error_chain.len(), 2);
        assert!(error_chain[0].contains("reading version file"));
        assert!(error_chain[0].contains("/protected/VERSION"));
        assert_eq!(error_chain[1], "access denied");
    }

    #[test]
    fn test_invalid_pattern_keeps_regex_error() {
        let source = regex::Regex::new("(").unwrap_err();
        let error = VersionError::InvalidPattern {
            pattern: "(".to_string(),
            source,
        };
        assert!(error.source().is_some());
        assert!(error.to_string().starts_with("Invalid match pattern '('"));
    }

    #[test]
    fn test_display_messages() {
        let not_found = VersionError::FileNotFound {
            what: "__init__.py".to_string(),
            path: PathBuf::from("pkg/__init__.py"),
        };
        assert_eq!(
            not_found.to_string(),
            format!(
                "__init__.py file not found at {}, cannot extract dynamic version",
                PathBuf::from("pkg/__init__.py").display()
            )
        );

        let ambiguous = VersionError::AmbiguousPackage { count: 3 };
        assert!(ambiguous.to_string().contains("More than one package set (3)"));

        let syntax = VersionError::Syntax {
            path: PathBuf::from("pkg/__init__.py"),
            line: 4,
            column: 2,
        };
        assert!(syntax.to_string().contains("line 4, column 2"));
    }

    #[test]
    fn test_user_actionable_classification() {
        let config = VersionError::configuration("source must not be empty");
        assert!(config.is_user_actionable());
        assert_eq!(
            config.user_message().as_deref(),
            Some("Invalid [tool.poetry-version] configuration: source must not be empty")
        );

        let no_tag = VersionError::NoTag { status: Some(128) };
        assert!(no_tag.is_user_actionable());

        let io_error = VersionError::io(
            "reading manifest",
            "pyproject.toml",
            io::Error::new(io::ErrorKind::Other, "disk gone"),
        );
        assert!(!io_error.is_user_actionable());
        assert_eq!(io_error.user_message(), None);

        let parser = VersionError::Parser {
            message: "incompatible language version".to_string(),
        };
        assert!(!parser.is_user_actionable());
    }

    #[test]
    fn test_missing_git_is_not_a_missing_tag() {
        let error = VersionError::GitUnavailable {
            source: which::Error::CannotFindBinaryPath,
        };
        assert!(!error.is_user_actionable());
        assert!(error.source().is_some());
        assert_eq!(
            error.to_string(),
            "Git executable not found, cannot extract dynamic version from tags"
        );
    }
}
