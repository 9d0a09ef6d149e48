//! Configuration for scorebridge applications.
//!
//! Provides the [`ScorebridgeConfig`] struct that loads from TOML files,
//! environment variables, and defaults using the `confyg` crate.
//!
//! # Loading Priority
//!
//! 1. Explicit `--config <path>` flag
//! 2. `SCOREBRIDGE_CONFIG` environment variable
//! 3. XDG default: `~/.config/scorebridge/config.toml`
//! 4. Built-in defaults
//!
//! Environment overlay uses the `SCOREBRIDGE_` prefix with section names,
//! e.g. `SCOREBRIDGE_SCORING_URL`, `SCOREBRIDGE_SCORING_API_KEY`,
//! `SCOREBRIDGE_SCORING_DEPLOYMENT`, `SCOREBRIDGE_SERVER_PORT`.
//!
//! The loaded values are immutable for the lifetime of the process; the
//! endpoint client validates the scoring section on every invocation rather
//! than only at startup, so a misconfigured process fails individual calls
//! instead of crashing the server.

use confyg::{env, Confygery};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{Error, Result};

// ============================================================================
// Configuration structs
// ============================================================================

/// Main configuration for scorebridge applications.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScorebridgeConfig {
    /// Remote scoring endpoint configuration.
    pub scoring: ScoringConfig,

    /// HTTP host configuration.
    pub server: ServerConfig,
}

/// Remote scoring endpoint configuration.
///
/// Empty strings mean "unset"; the endpoint client rejects invocations
/// until `url` and `api_key` are both non-empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Target scoring endpoint URL.
    pub url: String,

    /// Bearer credential for the Authorization header.
    pub api_key: String,

    /// Optional deployment slot; when non-empty, added as a routing header
    /// so one scoring URL can fan out to a specific model deployment.
    pub deployment: String,
}

/// HTTP host configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,

    /// Port to listen on.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

// ============================================================================
// Config loading
// ============================================================================

impl ScorebridgeConfig {
    /// Load configuration from file, environment, and defaults.
    ///
    /// Loading priority:
    /// 1. Explicit `config_path` (from `--config` flag)
    /// 2. `SCOREBRIDGE_CONFIG` env var
    /// 3. XDG default: `~/.config/scorebridge/config.toml`
    /// 4. Built-in defaults
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        let mut builder =
            Confygery::new().map_err(|e| Error::config(format!("config init: {e}")))?;

        if let Some(path) = Self::resolve_config_path(config_path) {
            if path.exists() {
                builder
                    .add_file(&path.to_string_lossy())
                    .map_err(|e| Error::config(format!("config file: {e}")))?;
            }
        }

        let mut env_opts = env::Options::with_top_level("SCOREBRIDGE");
        env_opts.add_section("scoring");
        builder
            .add_env(env_opts)
            .map_err(|e| Error::config(format!("config env: {e}")))?;

        let mut config: Self = builder
            .build()
            .map_err(|e| Error::config(format!("config build: {e}")))?;

        // confyg passes env values through as TOML strings, which breaks
        // numeric fields like the port, so the server section is overlaid
        // manually instead of via add_section.
        if let Ok(host) = std::env::var("SCOREBRIDGE_SERVER_HOST") {
            config.server.host = host;
        }
        if let Ok(port) = std::env::var("SCOREBRIDGE_SERVER_PORT") {
            config.server.port = port
                .parse()
                .map_err(|_| Error::config(format!("invalid SCOREBRIDGE_SERVER_PORT: {port}")))?;
        }

        Ok(config)
    }

    /// Resolve the config file path from explicit flag, env var, or XDG default.
    pub fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
        // 1. Explicit --config flag
        if let Some(path) = explicit {
            return Some(PathBuf::from(path));
        }

        // 2. SCOREBRIDGE_CONFIG env var
        if let Ok(path) = std::env::var("SCOREBRIDGE_CONFIG") {
            return Some(PathBuf::from(path));
        }

        // 3. XDG default
        Self::default_config_path()
    }

    /// Return the XDG default config path.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("scorebridge").join("config.toml"))
    }

    /// Serialize this config to a pretty-printed TOML string.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Serializes tests that mutate process environment.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    /// RAII guard for env var manipulation in tests.
    ///
    /// Env mutation is unsafe in edition 2024; tests touching the
    /// environment stay single-threaded per variable.
    struct EnvGuard {
        key: String,
        prev: Option<String>,
    }

    impl EnvGuard {
        fn new(key: &str, value: &str) -> Self {
            let prev = std::env::var(key).ok();
            unsafe { std::env::set_var(key, value) };
            Self {
                key: key.to_string(),
                prev,
            }
        }

        fn remove(key: &str) -> Self {
            let prev = std::env::var(key).ok();
            unsafe { std::env::remove_var(key) };
            Self {
                key: key.to_string(),
                prev,
            }
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            if let Some(ref val) = self.prev {
                unsafe { std::env::set_var(&self.key, val) };
            } else {
                unsafe { std::env::remove_var(&self.key) };
            }
        }
    }

    // ------------------------------------------------------------------------
    // Default tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_scorebridge_config_default() {
        let config = ScorebridgeConfig::default();
        assert!(config.scoring.url.is_empty());
        assert!(config.scoring.api_key.is_empty());
        assert!(config.scoring.deployment.is_empty());
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
    }

    // ------------------------------------------------------------------------
    // Serialization tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_scorebridge_config_from_toml() {
        let toml_str = r#"
            [scoring]
            url = "https://score.example.com/score"
            api_key = "secret"
            deployment = "blue"

            [server]
            host = "127.0.0.1"
            port = 9090
        "#;

        let config: ScorebridgeConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.scoring.url, "https://score.example.com/score");
        assert_eq!(config.scoring.api_key, "secret");
        assert_eq!(config.scoring.deployment, "blue");
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9090);
    }

    #[test]
    fn test_scorebridge_config_to_toml() {
        let config = ScorebridgeConfig::default();
        let toml_str = config.to_toml_string().unwrap();
        assert!(toml_str.contains("[scoring]"));
        assert!(toml_str.contains("[server]"));
        assert!(toml_str.contains("port = 8080"));

        // Round-trip
        let parsed: ScorebridgeConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.server.port, config.server.port);
        assert_eq!(parsed.scoring.url, config.scoring.url);
    }

    // ------------------------------------------------------------------------
    // Loading tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_scorebridge_config_load_from_file() {
        let _lock = ENV_LOCK.lock().unwrap();
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
                [scoring]
                url = "https://loaded.example.com/score"
                [server]
                port = 9191
            "#,
        )
        .unwrap();

        let config = ScorebridgeConfig::load(Some(path.to_str().unwrap())).unwrap();
        assert_eq!(config.scoring.url, "https://loaded.example.com/score");
        assert_eq!(config.server.port, 9191);
    }

    #[test]
    fn test_scorebridge_config_load_defaults() {
        // Load with a nonexistent file falls back to defaults
        let _lock = ENV_LOCK.lock().unwrap();
        let config = ScorebridgeConfig::load(Some("/nonexistent/config.toml")).unwrap();
        assert!(config.scoring.url.is_empty());
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn test_scorebridge_config_load_env_overlay() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
                [scoring]
                url = "https://file.example.com/score"
            "#,
        )
        .unwrap();

        // Env vars override file values.
        let _lock = ENV_LOCK.lock().unwrap();
        let _guard = EnvGuard::new("SCOREBRIDGE_SCORING_URL", "https://env.example.com/score");
        let config = ScorebridgeConfig::load(Some(path.to_str().unwrap())).unwrap();
        assert_eq!(config.scoring.url, "https://env.example.com/score");
    }

    #[test]
    fn test_scorebridge_config_load_port_env_overlay() {
        let _lock = ENV_LOCK.lock().unwrap();
        let _guard = EnvGuard::new("SCOREBRIDGE_SERVER_PORT", "9090");
        let config = ScorebridgeConfig::load(Some("/nonexistent/config.toml")).unwrap();
        assert_eq!(config.server.port, 9090);
    }

    #[test]
    fn test_scorebridge_config_load_port_env_overrides_file() {
        let _lock = ENV_LOCK.lock().unwrap();
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
                [server]
                port = 3000
            "#,
        )
        .unwrap();

        let _guard = EnvGuard::new("SCOREBRIDGE_SERVER_PORT", "9090");
        let config = ScorebridgeConfig::load(Some(path.to_str().unwrap())).unwrap();
        assert_eq!(config.server.port, 9090);
    }

    #[test]
    fn test_scorebridge_config_load_host_env_overlay() {
        let _lock = ENV_LOCK.lock().unwrap();
        let _guard = EnvGuard::new("SCOREBRIDGE_SERVER_HOST", "127.0.0.1");
        let config = ScorebridgeConfig::load(Some("/nonexistent/config.toml")).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
    }

    #[test]
    fn test_scorebridge_config_load_invalid_port_env_is_config_error() {
        let _lock = ENV_LOCK.lock().unwrap();
        let _guard = EnvGuard::new("SCOREBRIDGE_SERVER_PORT", "not-a-port");
        let err = ScorebridgeConfig::load(Some("/nonexistent/config.toml")).unwrap_err();
        assert!(err.is_config());
        assert!(err.to_string().contains("SCOREBRIDGE_SERVER_PORT"));
    }

    // ------------------------------------------------------------------------
    // resolve_config_path tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_scorebridge_config_resolve_config_path_explicit() {
        let path = ScorebridgeConfig::resolve_config_path(Some("/explicit/config.toml"));
        assert_eq!(path, Some(PathBuf::from("/explicit/config.toml")));
    }

    #[test]
    fn test_scorebridge_config_resolve_config_path_env() {
        let _lock = ENV_LOCK.lock().unwrap();
        let _guard = EnvGuard::new("SCOREBRIDGE_CONFIG", "/env/config.toml");
        let path = ScorebridgeConfig::resolve_config_path(None);
        assert_eq!(path, Some(PathBuf::from("/env/config.toml")));
    }

    #[test]
    fn test_scorebridge_config_resolve_config_path_default() {
        let _lock = ENV_LOCK.lock().unwrap();
        let _guard = EnvGuard::remove("SCOREBRIDGE_CONFIG");
        let path = ScorebridgeConfig::resolve_config_path(None);
        assert!(path.is_some());
        let p = path.unwrap();
        assert!(p.to_str().unwrap().contains("scorebridge"));
        assert!(p.to_str().unwrap().ends_with("config.toml"));
    }

    // ------------------------------------------------------------------------
    // Clone + Send + Sync
    // ------------------------------------------------------------------------

    #[test]
    fn test_scorebridge_config_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ScorebridgeConfig>();
    }
}
