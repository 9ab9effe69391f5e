use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

const DEFAULT_CORS_ORIGINS: &str =
    "http://localhost:3000,http://localhost:3001,http://localhost:8080,http://localhost:8081";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can drive it with a plain
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let env = parse_environment(&or_default("COMPETEINTEL_ENV", "development"))?;

    let bind_addr = or_default("COMPETEINTEL_BIND_ADDR", "0.0.0.0:8000")
        .parse::<SocketAddr>()
        .map_err(|e| invalid("COMPETEINTEL_BIND_ADDR", e.to_string()))?;
    let log_level = or_default("COMPETEINTEL_LOG_LEVEL", "info");
    let api_title = or_default("COMPETEINTEL_API_TITLE", "CompeteIntel API");
    let api_version = or_default("COMPETEINTEL_API_VERSION", "1.0.0");

    let cors_origins: Vec<String> = or_default("COMPETEINTEL_CORS_ORIGINS", DEFAULT_CORS_ORIGINS)
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToOwned::to_owned)
        .collect();

    let mock_seed = or_default("COMPETEINTEL_MOCK_SEED", "42")
        .parse::<u64>()
        .map_err(|e| invalid("COMPETEINTEL_MOCK_SEED", e.to_string()))?;
    let mock_segment_size = or_default("COMPETEINTEL_MOCK_SEGMENT_SIZE", "30")
        .parse::<usize>()
        .map_err(|e| invalid("COMPETEINTEL_MOCK_SEGMENT_SIZE", e.to_string()))?;
    if mock_segment_size == 0 {
        return Err(invalid(
            "COMPETEINTEL_MOCK_SEGMENT_SIZE",
            "must be at least 1".to_string(),
        ));
    }

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        api_title,
        api_version,
        cors_origins,
        mock_seed,
        mock_segment_size,
    })
}

/// Parse a string into an `Environment` variant.
///
/// # Errors
///
/// Returns `ConfigError::InvalidEnvVar` for anything other than
/// `development`, `test` or `production`.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "COMPETEINTEL_ENV".to_string(),
            reason: format!("unknown environment {other:?}"),
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::env::VarError;

    use super::*;

    fn lookup_from_map<'a>(
        map: &'a HashMap<&'a str, &'a str>,
    ) -> impl Fn(&str) -> Result<String, VarError> + 'a {
        move |key| {
            map.get(key)
                .map(|v| (*v).to_string())
                .ok_or(VarError::NotPresent)
        }
    }

    #[test]
    fn parse_environment_known_values() {
        assert_eq!(
            parse_environment("development").unwrap(),
            Environment::Development
        );
        assert_eq!(parse_environment("test").unwrap(), Environment::Test);
        assert_eq!(
            parse_environment("production").unwrap(),
            Environment::Production
        );
    }

    #[test]
    fn parse_environment_unknown_fails() {
        let err = parse_environment("staging").unwrap_err();
        assert!(
            matches!(err, ConfigError::InvalidEnvVar { ref var, .. } if var == "COMPETEINTEL_ENV")
        );
    }

    #[test]
    fn build_app_config_defaults_with_empty_env() {
        let map: HashMap<&str, &str> = HashMap::new();
        let cfg = build_app_config(lookup_from_map(&map)).expect("defaults are valid");
        assert_eq!(cfg.env, Environment::Development);
        assert_eq!(cfg.bind_addr.to_string(), "0.0.0.0:8000");
        assert_eq!(cfg.log_level, "info");
        assert_eq!(cfg.api_title, "CompeteIntel API");
        assert_eq!(cfg.api_version, "1.0.0");
        assert_eq!(cfg.cors_origins.len(), 4);
        assert_eq!(cfg.mock_seed, 42);
        assert_eq!(cfg.mock_segment_size, 30);
    }

    #[test]
    fn build_app_config_fails_with_invalid_bind_addr() {
        let mut map = HashMap::new();
        map.insert("COMPETEINTEL_BIND_ADDR", "not-a-socket-addr");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "COMPETEINTEL_BIND_ADDR"),
            "expected InvalidEnvVar(COMPETEINTEL_BIND_ADDR), got: {result:?}"
        );
    }

    #[test]
    fn cors_origins_are_split_and_trimmed() {
        let mut map = HashMap::new();
        map.insert(
            "COMPETEINTEL_CORS_ORIGINS",
            " https://app.example.com.br , ,https://www.example.com.br",
        );
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(
            cfg.cors_origins,
            vec!["https://app.example.com.br", "https://www.example.com.br"]
        );
    }

    #[test]
    fn mock_seed_override() {
        let mut map = HashMap::new();
        map.insert("COMPETEINTEL_MOCK_SEED", "7");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.mock_seed, 7);
    }

    #[test]
    fn mock_seed_invalid() {
        let mut map = HashMap::new();
        map.insert("COMPETEINTEL_MOCK_SEED", "not-a-number");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "COMPETEINTEL_MOCK_SEED"),
            "expected InvalidEnvVar(COMPETEINTEL_MOCK_SEED), got: {result:?}"
        );
    }

    #[test]
    fn mock_segment_size_must_be_positive() {
        let mut map = HashMap::new();
        map.insert("COMPETEINTEL_MOCK_SEGMENT_SIZE", "0");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "COMPETEINTEL_MOCK_SEGMENT_SIZE"),
            "expected InvalidEnvVar(COMPETEINTEL_MOCK_SEGMENT_SIZE), got: {result:?}"
        );
    }

    #[test]
    fn debug_output_summarises_config() {
        let map: HashMap<&str, &str> = HashMap::new();
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        let rendered = format!("{cfg:?}");
        assert!(rendered.contains("CompeteIntel API 1.0.0"));
        assert!(rendered.contains("mock_seed: 42"));
    }
}
