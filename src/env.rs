use crate::error::{OptkitError, Result};

/// Reads `key` from the process environment, falling back to `default` when
/// the variable is unset. No caching; every call re-reads the live
/// environment. A value that is not valid Unicode is treated as unset.
pub fn env_var_or_default(key: &str, default: &str) -> String {
    match std::env::var(key) {
        Ok(value) => value,
        Err(_) => {
            tracing::debug!("Environment variable {} not set, using default", key);
            default.to_string()
        }
    }
}

/// Fallible counterpart of [`env_var_or_default`] for callers that cannot
/// proceed without the variable.
pub fn required_env_var(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| OptkitError::MissingEnvError {
        key: key.to_string(),
    })
}

/// Positional lookup into an argument vector, with a fallback for
/// out-of-range indices. Never panics.
pub fn arg_at_or_default(args: &[String], index: usize, default: &str) -> String {
    args.get(index)
        .cloned()
        .unwrap_or_else(|| default.to_string())
}
