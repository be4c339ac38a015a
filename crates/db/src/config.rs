use std::fmt;

use sqlx::mysql::MySqlConnectOptions;

/// Connection parameters for the sensor-readings store.
///
/// A `DATABASE_URL` takes precedence over the individual `DB_*` parts.
#[derive(Clone)]
pub struct StoreConfig {
    /// Full `mysql://` URL, if provided.
    pub url: Option<String>,
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
}

impl StoreConfig {
    /// Load store configuration from environment variables with defaults.
    ///
    /// | Env Var        | Default              |
    /// |----------------|----------------------|
    /// | `DATABASE_URL` | unset                |
    /// | `DB_HOST`      | `localhost`          |
    /// | `DB_PORT`      | `3306`               |
    /// | `DB_USER`      | `root`               |
    /// | `DB_PASSWORD`  | empty                |
    /// | `DB_NAME`      | `iot_health_monitor` |
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Same as [`StoreConfig::from_env`] but reading through `lookup`.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let url = lookup("DATABASE_URL").filter(|s| !s.trim().is_empty());
        let host = lookup("DB_HOST").unwrap_or_else(|| "localhost".into());
        let port: u16 = lookup("DB_PORT")
            .unwrap_or_else(|| "3306".into())
            .parse()
            .expect("DB_PORT must be a valid u16");
        let user = lookup("DB_USER").unwrap_or_else(|| "root".into());
        let password = lookup("DB_PASSWORD").unwrap_or_default();
        let database = lookup("DB_NAME").unwrap_or_else(|| "iot_health_monitor".into());

        Self {
            url,
            host,
            port,
            user,
            password,
            database,
        }
    }

    /// Build sqlx connect options. Fails only on a malformed `url`.
    pub fn connect_options(&self) -> Result<MySqlConnectOptions, sqlx::Error> {
        if let Some(url) = &self.url {
            return url.parse();
        }

        Ok(MySqlConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.database))
    }
}

impl fmt::Debug for StoreConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreConfig")
            .field("url", &self.url.as_ref().map(|_| "<redacted>"))
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("database", &self.database)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_point_at_local_database() {
        let config = StoreConfig::from_vars(vars(&[]));
        assert_eq!(config.url, None);
        assert_eq!(config.host, "localhost");
        assert_eq!(config.port, 3306);
        assert_eq!(config.user, "root");
        assert_eq!(config.password, "");
        assert_eq!(config.database, "iot_health_monitor");
        assert!(config.connect_options().is_ok());
    }

    #[test]
    fn parts_override_defaults() {
        let config = StoreConfig::from_vars(vars(&[
            ("DB_HOST", "db.internal"),
            ("DB_PORT", "3307"),
            ("DB_USER", "monitor"),
            ("DB_PASSWORD", "s3cret"),
            ("DB_NAME", "wards"),
        ]));
        assert_eq!(config.host, "db.internal");
        assert_eq!(config.port, 3307);
        assert_eq!(config.user, "monitor");
        assert_eq!(config.password, "s3cret");
        assert_eq!(config.database, "wards");
    }

    #[test]
    fn blank_database_url_is_ignored() {
        let config = StoreConfig::from_vars(vars(&[("DATABASE_URL", "  ")]));
        assert_eq!(config.url, None);
    }

    #[test]
    fn database_url_is_parsed() {
        let config = StoreConfig::from_vars(vars(&[(
            "DATABASE_URL",
            "mysql://monitor:pw@127.0.0.1:3306/iot_health_monitor",
        )]));
        assert!(config.connect_options().is_ok());
    }

    #[test]
    fn malformed_database_url_is_rejected() {
        let config = StoreConfig::from_vars(vars(&[("DATABASE_URL", "not a url")]));
        assert!(config.connect_options().is_err());
    }

    #[test]
    fn debug_redacts_password() {
        let config = StoreConfig::from_vars(vars(&[("DB_PASSWORD", "hunter2")]));
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("hunter2"));
    }

    #[test]
    #[should_panic(expected = "DB_PORT must be a valid u16")]
    fn invalid_port_fails_fast() {
        StoreConfig::from_vars(vars(&[("DB_PORT", "not-a-port")]));
    }
}
