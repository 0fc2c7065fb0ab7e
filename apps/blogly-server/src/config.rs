//! Application configuration loaded from environment variables.

use std::env;

use blogly_core::domain::UserDeletePolicy;
use blogly_infra::DatabaseConfig;

const DEFAULT_DATABASE_URL: &str = "postgres://localhost/blogly";

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: DatabaseConfig,
    /// Create missing tables at startup instead of relying on the migration tool.
    pub auto_migrate: bool,
    pub user_delete_policy: UserDeletePolicy,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let database = DatabaseConfig {
            url: get("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            max_connections: get("DB_MAX_CONNECTIONS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(10),
            min_connections: get("DB_MIN_CONNECTIONS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(1),
            sql_logging: get("DB_SQL_LOGGING").is_some_and(|v| is_truthy(&v)),
        };

        let user_delete_policy = match get("USER_DELETE_POLICY") {
            Some(raw) => raw.parse().unwrap_or_else(|err| {
                tracing::warn!("{}; falling back to restrict", err);
                UserDeletePolicy::Restrict
            }),
            None => UserDeletePolicy::default(),
        };

        Self {
            host: get("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: get("PORT").and_then(|p| p.parse().ok()).unwrap_or(8080),
            database,
            auto_migrate: get("AUTO_MIGRATE").is_some_and(|v| is_truthy(&v)),
            user_delete_policy,
        }
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.database.url, DEFAULT_DATABASE_URL);
        assert_eq!(config.database.max_connections, 10);
        assert!(!config.database.sql_logging);
        assert!(!config.auto_migrate);
        assert_eq!(config.user_delete_policy, UserDeletePolicy::Restrict);
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("HOST", "0.0.0.0"),
            ("PORT", "3000"),
            ("DATABASE_URL", "sqlite://blogly.db?mode=rwc"),
            ("DB_MAX_CONNECTIONS", "4"),
            ("DB_SQL_LOGGING", "true"),
            ("AUTO_MIGRATE", "1"),
            ("USER_DELETE_POLICY", "cascade"),
        ]);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.database.url, "sqlite://blogly.db?mode=rwc");
        assert_eq!(config.database.max_connections, 4);
        assert!(config.database.sql_logging);
        assert!(config.auto_migrate);
        assert_eq!(config.user_delete_policy, UserDeletePolicy::Cascade);
    }

    #[test]
    fn test_bad_values_fall_back() {
        let config = load(&[("PORT", "eighty"), ("USER_DELETE_POLICY", "explode")]);
        assert_eq!(config.port, 8080);
        assert_eq!(config.user_delete_policy, UserDeletePolicy::Restrict);
    }
}
