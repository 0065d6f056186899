//! Environment variable expansion for configuration strings.
//!
//! Supports:
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default

use crate::ConfigError;

/// Expand environment variable references in a string.
///
/// Returns the original string unchanged if no `${}` patterns are present.
/// Bare `$VAR` syntax is not expanded (only `${VAR}` with braces).
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    // Fast path: no expansion needed
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    shellexpand::env_with_context(value, |var| -> Result<Option<String>, LookupError> {
        match std::env::var(var) {
            Ok(val) => Ok(Some(val)),
            Err(_) => Err(LookupError {
                var_name: var.to_owned(),
            }),
        }
    })
    .map(|cow| cow.into_owned())
    .map_err(|e| ConfigError::EnvVar {
        field: field.to_owned(),
        message: format!("${{{0}}} not set", e.cause.var_name),
    })
}

/// Error returned when environment variable lookup fails.
struct LookupError {
    var_name: String,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_expand_simple_var() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("HOMELINK_TEST_VAR", "landing");
        }
        let result = expand_env("${HOMELINK_TEST_VAR}", "home.route").unwrap();
        assert_eq!(result, "landing");
        unsafe {
            std::env::remove_var("HOMELINK_TEST_VAR");
        }
    }

    #[test]
    fn test_expand_with_default_uses_value() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("HOMELINK_TEST_DEFAULT", "portal");
        }
        let result = expand_env("${HOMELINK_TEST_DEFAULT:-home}", "home.route").unwrap();
        assert_eq!(result, "portal");
        unsafe {
            std::env::remove_var("HOMELINK_TEST_DEFAULT");
        }
    }

    #[test]
    fn test_expand_with_default_uses_default() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("HOMELINK_TEST_UNSET");
        }
        let result = expand_env("${HOMELINK_TEST_UNSET:-home}", "home.route").unwrap();
        assert_eq!(result, "home");
    }

    #[test]
    fn test_expand_missing_var_error() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("HOMELINK_TEST_MISSING");
        }
        let result = expand_env("${HOMELINK_TEST_MISSING}", "home.route");
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(matches!(err, ConfigError::EnvVar { .. }));
        assert!(err.to_string().contains("HOMELINK_TEST_MISSING"));
        assert!(err.to_string().contains("home.route"));
    }

    #[test]
    fn test_expand_literal_unchanged() {
        let result = expand_env("Project Home", "home.label").unwrap();
        assert_eq!(result, "Project Home");
    }

    #[test]
    fn test_expand_embedded_var() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("HOMELINK_TEST_NS", "accounts");
        }
        let result = expand_env("${HOMELINK_TEST_NS}:index", "home.route").unwrap();
        assert_eq!(result, "accounts:index");
        unsafe {
            std::env::remove_var("HOMELINK_TEST_NS");
        }
    }

    #[test]
    fn test_bare_dollar_not_expanded() {
        // $VAR without braces should not be expanded
        let result = expand_env("$VAR", "home.label").unwrap();
        assert_eq!(result, "$VAR");
    }
}
