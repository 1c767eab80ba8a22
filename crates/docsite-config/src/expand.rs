//! Environment variable expansion for configuration strings.

use crate::ConfigError;

/// Expand `${VAR}` and `${VAR:-default}` references in `value`.
///
/// `field` names the configuration field for error messages.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    shellexpand::env(value)
        .map(std::borrow::Cow::into_owned)
        .map_err(|e| ConfigError::EnvVar {
            field: field.to_owned(),
            message: format!("${{{}}} {}", e.var_name, describe(&e.cause)),
        })
}

fn describe(cause: &std::env::VarError) -> &'static str {
    match cause {
        std::env::VarError::NotPresent => "not set",
        std::env::VarError::NotUnicode(_) => "is not valid unicode",
    }
}
