use anyhow::Result;
use serde::Deserialize;
use anyhow::anyhow;

pub const DEFAULT_PORT: u16 = 3333;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: default_host(), port: DEFAULT_PORT, worker_threads: None }
    }
}

fn default_host() -> String { "127.0.0.1".into() }
fn default_port() -> u16 { DEFAULT_PORT }

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default)]
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_secs: u64,
    #[serde(default = "default_max_lifetime")]
    pub max_lifetime_secs: u64,
    #[serde(default = "default_acquire_timeout")]
    pub acquire_timeout_secs: u64,
    #[serde(default)]
    pub sqlx_logging: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            max_connections: default_max_connections(),
            min_connections: default_min_connections(),
            connect_timeout_secs: default_connect_timeout(),
            idle_timeout_secs: default_idle_timeout(),
            max_lifetime_secs: default_max_lifetime(),
            acquire_timeout_secs: default_acquire_timeout(),
            sqlx_logging: false,
        }
    }
}

fn default_max_connections() -> u32 { 10 }
fn default_min_connections() -> u32 { 2 }
fn default_connect_timeout() -> u64 { 30 }
fn default_idle_timeout() -> u64 { 600 }
fn default_max_lifetime() -> u64 { 3600 }
fn default_acquire_timeout() -> u64 { 30 }

/// Output format of the tracing subscriber.
#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

impl LogFormat {
    fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "compact" | "text" => Some(Self::Compact),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct LoggingConfig {
    #[serde(default)]
    pub format: LogFormat,
}

/// Load `CONFIG_PATH` (or `config.toml`). A missing file yields defaults.
pub fn load_default() -> Result<AppConfig> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    if !std::path::Path::new(&path).exists() {
        return Ok(AppConfig::default());
    }
    load_from_file(&path)
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    load_from_str(&content)
}

pub fn load_from_str(content: &str) -> Result<AppConfig> {
    let cfg: AppConfig = toml::from_str(content)?;
    Ok(cfg)
}

impl AppConfig {
    /// File, then process environment, then validation.
    pub fn load_and_validate() -> Result<Self> {
        let mut cfg = load_default()?;
        cfg.apply_env(|key| std::env::var(key).ok());
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    /// Apply environment overrides through `lookup` so callers can substitute the source.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("SERVER_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("PORT").and_then(|p| p.trim().parse::<u16>().ok()) {
            self.server.port = port;
        }
        if let Some(w) = lookup("TOKIO_WORKER_THREADS").and_then(|v| v.trim().parse::<usize>().ok()) {
            self.server.worker_threads = Some(w);
        }
        if let Some(url) = lookup("DATABASE_URL") {
            if !url.trim().is_empty() {
                self.database.url = url;
            }
        }
        if let Some(format) = lookup("LOG_FORMAT").as_deref().and_then(LogFormat::parse) {
            self.logging.format = format;
        }
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        // 归一化 server
        self.server.normalize()?;
        self.database.validate()?;
        Ok(())
    }
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = default_host();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be in 1..=65535"));
        }
        if self.worker_threads == Some(0) {
            self.worker_threads = None;
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl DatabaseConfig {
    pub fn validate(&self) -> Result<()> {
        if self.url.trim().is_empty() {
            return Err(anyhow!("database.url is empty; set it in config.toml or DATABASE_URL"));
        }
        let lower = self.url.to_lowercase();
        if !(lower.starts_with("postgresql://") || lower.starts_with("postgres://") || lower.starts_with("sqlite:")) {
            return Err(anyhow!("database.url must start with postgres://, postgresql:// or sqlite:"));
        }
        if self.min_connections == 0 {
            return Err(anyhow!("database.min_connections must be >= 1"));
        }
        if self.max_connections < self.min_connections {
            return Err(anyhow!("database.max_connections must be >= min_connections"));
        }
        if self.connect_timeout_secs == 0 || self.acquire_timeout_secs == 0 {
            return Err(anyhow!("database timeouts must be positive seconds"));
        }
        Ok(())
    }

    /// Single-connection in-memory SQLite, the shape every store-backed test uses.
    pub fn sqlite_memory() -> Self {
        Self {
            url: "sqlite::memory:".into(),
            max_connections: 1,
            min_connections: 1,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_listen_on_3333() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.server.port, 3333);
        assert_eq!(cfg.server.host, "127.0.0.1");
        assert_eq!(cfg.logging.format, LogFormat::Compact);
        assert_eq!(cfg.database.max_connections, 10);
    }

    #[test]
    fn parses_partial_toml() {
        let cfg = load_from_str(
            r#"
            [server]
            port = 8088

            [database]
            url = "postgres://u:p@localhost/products"
            max_connections = 4

            [logging]
            format = "json"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.server.port, 8088);
        assert_eq!(cfg.server.host, "127.0.0.1");
        assert_eq!(cfg.database.max_connections, 4);
        assert_eq!(cfg.database.min_connections, 2);
        assert_eq!(cfg.logging.format, LogFormat::Json);
    }

    #[test]
    fn env_overrides_file_values() {
        let mut cfg = load_from_str("[server]\nport = 9000\n").unwrap();
        cfg.apply_env(env_of(&[
            ("PORT", "4444"),
            ("DATABASE_URL", "sqlite::memory:"),
            ("LOG_FORMAT", "JSON"),
            ("TOKIO_WORKER_THREADS", "2"),
        ]));
        assert_eq!(cfg.server.port, 4444);
        assert_eq!(cfg.server.worker_threads, Some(2));
        assert_eq!(cfg.database.url, "sqlite::memory:");
        assert_eq!(cfg.logging.format, LogFormat::Json);
    }

    #[test]
    fn unparsable_port_keeps_previous_value() {
        let mut cfg = AppConfig::default();
        cfg.apply_env(env_of(&[("PORT", "not-a-port")]));
        assert_eq!(cfg.server.port, DEFAULT_PORT);
    }

    #[test]
    fn validate_rejects_missing_or_foreign_url() {
        let mut cfg = AppConfig::default();
        assert!(cfg.normalize_and_validate().is_err());

        cfg.database.url = "mysql://localhost/db".into();
        assert!(cfg.normalize_and_validate().is_err());

        cfg.database.url = "postgres://localhost/db".into();
        assert!(cfg.normalize_and_validate().is_ok());
    }

    #[test]
    fn validate_rejects_inconsistent_pool_bounds() {
        let mut db = DatabaseConfig { url: "sqlite::memory:".into(), ..DatabaseConfig::default() };
        db.min_connections = 5;
        db.max_connections = 2;
        assert!(db.validate().is_err());
        db.min_connections = 0;
        assert!(db.validate().is_err());
    }

    #[test]
    fn zero_port_is_rejected_and_blank_host_defaulted() {
        let mut cfg = AppConfig::default();
        cfg.database = DatabaseConfig::sqlite_memory();
        cfg.server.host = "  ".into();
        cfg.normalize_and_validate().unwrap();
        assert_eq!(cfg.server.host, "127.0.0.1");

        cfg.server.port = 0;
        assert!(cfg.normalize_and_validate().is_err());
    }
}
