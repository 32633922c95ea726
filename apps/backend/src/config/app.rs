use std::env;
use std::str::FromStr;

use crate::domain::range::RangeConfig;
use crate::error::AppError;

/// Process-level settings read once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Initial range; may be replaced at runtime through `RuntimeRangeConfig`.
    pub range: RangeConfig,
    /// Browser origins allowed by CORS.
    pub allowed_origins: Vec<String>,
}

impl ServerConfig {
    /// Builds the server configuration from environment variables.
    ///
    /// An invalid range (`min >= max`) is accepted here and rejected when a
    /// game is started.
    pub fn from_env() -> Result<Self, AppError> {
        let defaults = RangeConfig::default();
        Ok(Self {
            host: host(),
            port: parse_var("BACKEND_PORT", 3001)?,
            range: RangeConfig::new(
                parse_var("GUESS_MIN_RANGE", defaults.min_range)?,
                parse_var("GUESS_MAX_RANGE", defaults.max_range)?,
            ),
            allowed_origins: allowed_origins(),
        })
    }
}

/// Get bind host from environment (defaults to 0.0.0.0)
fn host() -> String {
    env::var("BACKEND_HOST").unwrap_or_else(|_| "0.0.0.0".to_string())
}

/// Comma-separated `CORS_ALLOWED_ORIGINS`, keeping only http(s) entries.
/// Falls back to the local frontend dev server when nothing valid is set.
fn allowed_origins() -> Vec<String> {
    let raw = env::var("CORS_ALLOWED_ORIGINS").unwrap_or_default();
    let origins: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| s.starts_with("http://") || s.starts_with("https://"))
        .map(str::to_string)
        .collect();

    if origins.is_empty() {
        vec![
            "http://localhost:3000".to_string(),
            "http://127.0.0.1:3000".to_string(),
        ]
    } else {
        origins
    }
}

/// Parse an optional environment variable, falling back to `default` when unset
fn parse_var<T>(name: &str, default: T) -> Result<T, AppError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw.trim().parse::<T>().map_err(|e| {
            AppError::config(format!(
                "Environment variable '{name}' has invalid value '{raw}': {e}"
            ))
        }),
        Err(env::VarError::NotPresent) => Ok(default),
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use std::env;

    use serial_test::serial;

    use super::ServerConfig;
    use crate::domain::range::RangeConfig;

    const VARS: [&str; 5] = [
        "BACKEND_HOST",
        "BACKEND_PORT",
        "GUESS_MIN_RANGE",
        "GUESS_MAX_RANGE",
        "CORS_ALLOWED_ORIGINS",
    ];

    fn clear_test_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_defaults_when_unset() {
        clear_test_env();
        let cfg = ServerConfig::from_env().unwrap();
        assert_eq!(cfg.host, "0.0.0.0");
        assert_eq!(cfg.port, 3001);
        assert_eq!(cfg.range, RangeConfig::new(1, 100));
        assert_eq!(cfg.allowed_origins.len(), 2);
    }

    #[test]
    #[serial]
    fn test_origins_drop_invalid_entries() {
        clear_test_env();
        env::set_var(
            "CORS_ALLOWED_ORIGINS",
            "https://guess.example, null, ,ftp://nope,http://localhost:5173",
        );

        let cfg = ServerConfig::from_env().unwrap();
        assert_eq!(
            cfg.allowed_origins,
            vec!["https://guess.example", "http://localhost:5173"]
        );
        clear_test_env();
    }

    #[test]
    #[serial]
    fn test_reads_overrides() {
        clear_test_env();
        env::set_var("BACKEND_HOST", "127.0.0.1");
        env::set_var("BACKEND_PORT", "8080");
        env::set_var("GUESS_MIN_RANGE", "-5");
        env::set_var("GUESS_MAX_RANGE", " 5 ");

        let cfg = ServerConfig::from_env().unwrap();
        assert_eq!(cfg.host, "127.0.0.1");
        assert_eq!(cfg.port, 8080);
        assert_eq!(cfg.range, RangeConfig::new(-5, 5));
        clear_test_env();
    }

    #[test]
    #[serial]
    fn test_invalid_number_names_the_variable() {
        clear_test_env();
        env::set_var("GUESS_MAX_RANGE", "lots");

        let err = ServerConfig::from_env().unwrap_err();
        assert!(err.to_string().contains("GUESS_MAX_RANGE"));
        clear_test_env();
    }

    #[test]
    #[serial]
    fn test_inverted_range_is_loaded_as_is() {
        clear_test_env();
        env::set_var("GUESS_MIN_RANGE", "50");
        env::set_var("GUESS_MAX_RANGE", "50");

        let cfg = ServerConfig::from_env().unwrap();
        assert!(!cfg.range.is_valid());
        clear_test_env();
    }
}
