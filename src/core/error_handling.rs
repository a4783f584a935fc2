//! Generic error handling utilities
//!
//! Provides unified error logging that works across error types while keeping
//! the distinction between problems the user can fix in their project and
//! failures of the environment.

/// Trait for errors that can distinguish between user-actionable and system errors
///
/// When `is_user_actionable()` returns `true`, `user_message()` should return
/// `Some(message)` with a helpful, actionable message. When it returns `false`,
/// `user_message()` should return `None`.
pub trait ContextualError: std::error::Error {
    /// Returns true if this error carries a specific message the user can act on
    ///
    /// Examples of user-actionable errors:
    /// - A malformed `[tool.poetry-version]` section
    /// - A `__init__.py` without a `__version__` literal
    /// - A match pattern that does not compile
    ///
    /// Examples of system errors:
    /// - IO failures
    /// - A missing git executable
    fn is_user_actionable(&self) -> bool;

    /// Returns the specific user message if this is a user-actionable error
    fn user_message(&self) -> Option<String>;
}

/// Log errors with appropriate detail level based on error specificity
///
/// User-actionable errors are logged with their own message, system errors with
/// the operation context only. Full details always go to debug level.
///
/// ```rust,no_run
/// # use poetry_version::core::error_handling::log_error_with_context;
/// # use poetry_version::plugin::api::VersionError;
/// let err = VersionError::Configuration {
///     message: "unknown source 'svn'".to_string(),
/// };
/// log_error_with_context(&err, "Version resolution");
/// // Logs: "FATAL: Invalid [tool.poetry-version] configuration: unknown source 'svn'"
/// ```
pub fn log_error_with_context<E: ContextualError + std::fmt::Display + std::fmt::Debug>(
    error: &E,
    operation_context: &str,
) {
    match error.user_message() {
        Some(user_msg) if error.is_user_actionable() => log::error!("FATAL: {}", user_msg),
        _ => log::error!("FATAL: {}", operation_context),
    }
    log::debug!("DETAIL: {}", error);
    log::debug!("DEBUG_DETAILS: {:?}", error);
}
