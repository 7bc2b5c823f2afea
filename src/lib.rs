//! Note Store
//!
//! A small HTTP service for plain-text notes:
//! - One `<name>.txt` file per note in a configured store root
//! - CRUD endpoints under `/notes` plus a form-driven create at `/write`
//! - Embedded upload form and OpenAPI docs

pub mod api;
pub mod notes;

#[cfg(test)]
pub(crate) mod test_helpers;

use anyhow::{Context, Result};
use api::handlers::{NotesState, ServerState};
use notes::FsNoteStore;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;

// ============================================================================
// YAML config structs (deserialization targets)
// ============================================================================

/// Top-level YAML configuration file structure
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct YamlConfig {
    pub server: ServerYamlConfig,
}

/// Server configuration section. Every field may be supplied instead on the
/// command line or through the environment.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct ServerYamlConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub store_dir: Option<PathBuf>,
}

// ============================================================================
// Runtime config (what the application actually uses)
// ============================================================================

/// Values given on the command line or via environment variables.
/// These take priority over the YAML file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub store_dir: Option<PathBuf>,
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Store root: the directory holding one `<name>.txt` per note
    pub store_dir: PathBuf,
}

impl Config {
    /// Resolve configuration from overrides and an optional YAML file.
    ///
    /// Priority: CLI / env var > YAML. Host, port and store root have no
    /// defaults; a value missing from every source is an error.
    ///
    /// If `yaml_path` is None, tries "config.yaml" in CWD.
    pub fn resolve(overrides: ConfigOverrides, yaml_path: Option<&Path>) -> Result<Self> {
        Self::from_sources(overrides, Self::load_yaml(yaml_path))
    }

    /// Merge overrides on top of an already-parsed YAML config
    pub fn from_sources(overrides: ConfigOverrides, yaml: YamlConfig) -> Result<Self> {
        let host = overrides
            .host
            .or(yaml.server.host)
            .context("missing required option: host (--host / NOTES_HOST)")?;
        let port = overrides
            .port
            .or(yaml.server.port)
            .context("missing required option: port (--port / NOTES_PORT)")?;
        let store_dir = overrides
            .store_dir
            .or(yaml.server.store_dir)
            .context("missing required option: store directory (--cache / NOTES_STORE_DIR)")?;

        Ok(Self {
            host,
            port,
            store_dir,
        })
    }

    /// Address to bind, as `host:port`
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Try to load and parse a YAML config file. Returns defaults on any failure.
    fn load_yaml(yaml_path: Option<&Path>) -> YamlConfig {
        let default_path = Path::new("config.yaml");
        let path = yaml_path.unwrap_or(default_path);

        match std::fs::read_to_string(path) {
            Ok(contents) => match serde_yaml::from_str(&contents) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse {}: {}. Ignoring it.", path.display(), e);
                    YamlConfig::default()
                }
            },
            Err(_) => {
                tracing::debug!("No config file at {}, using CLI / env vars", path.display());
                YamlConfig::default()
            }
        }
    }
}

/// Open the store root (creating it if missing) and build the shared state
pub async fn build_state(config: &Config) -> Result<NotesState> {
    let store = FsNoteStore::open(&config.store_dir)
        .await
        .with_context(|| format!("failed to open store root {}", config.store_dir.display()))?;

    Ok(Arc::new(ServerState {
        store: Arc::new(store),
    }))
}

/// Start the HTTP server and run until Ctrl-C
pub async fn start_server(config: Config) -> Result<()> {
    let addr = config.bind_addr();
    let state = build_state(&config).await?;
    let app = api::create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    tracing::info!("Server running at http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod config_tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_yaml_config_loading() {
        let yaml = r#"
server:
  host: 0.0.0.0
  port: 9090
  store_dir: /var/lib/notes
"#;

        let config: YamlConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.server.host.as_deref(), Some("0.0.0.0"));
        assert_eq!(config.server.port, Some(9090));
        assert_eq!(
            config.server.store_dir,
            Some(PathBuf::from("/var/lib/notes"))
        );
    }

    #[test]
    fn test_yaml_defaults_are_empty() {
        let config: YamlConfig = serde_yaml::from_str("{}").unwrap();
        assert!(config.server.host.is_none());
        assert!(config.server.port.is_none());
        assert!(config.server.store_dir.is_none());
    }

    #[test]
    fn test_overrides_win_over_yaml() {
        let yaml: YamlConfig = serde_yaml::from_str(
            r#"
server:
  host: yaml-host
  port: 1111
  store_dir: /yaml/notes
"#,
        )
        .unwrap();
        let overrides = ConfigOverrides {
            host: None,
            port: Some(2222),
            store_dir: Some(PathBuf::from("/cli/notes")),
        };

        let config = Config::from_sources(overrides, yaml).unwrap();
        assert_eq!(config.host, "yaml-host");
        assert_eq!(config.port, 2222);
        assert_eq!(config.store_dir, PathBuf::from("/cli/notes"));
        assert_eq!(config.bind_addr(), "yaml-host:2222");
    }

    #[test]
    fn test_missing_required_option_is_an_error() {
        let overrides = ConfigOverrides {
            host: Some("127.0.0.1".into()),
            port: Some(3000),
            store_dir: None,
        };
        let err = Config::from_sources(overrides, YamlConfig::default()).unwrap_err();
        assert!(err.to_string().contains("store directory"));

        let err = Config::from_sources(ConfigOverrides::default(), YamlConfig::default())
            .unwrap_err();
        assert!(err.to_string().contains("host"));
    }

    #[test]
    fn test_resolve_reads_yaml_file() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("config.yaml");
        let mut file = std::fs::File::create(&file_path).unwrap();
        file.write_all(b"server:\n  host: 127.0.0.1\n  port: 7777\n  store_dir: ./notes\n")
            .unwrap();

        let config = Config::resolve(ConfigOverrides::default(), Some(&file_path)).unwrap();
        assert_eq!(config.port, 7777);
        assert_eq!(config.store_dir, PathBuf::from("./notes"));
    }

    #[test]
    fn test_resolve_without_yaml_file_uses_overrides() {
        let nonexistent = Path::new("/tmp/nonexistent-note-store-config-12345.yaml");
        let overrides = ConfigOverrides {
            host: Some("localhost".into()),
            port: Some(8080),
            store_dir: Some(PathBuf::from("cache")),
        };
        let config = Config::resolve(overrides, Some(nonexistent)).unwrap();
        assert_eq!(config.bind_addr(), "localhost:8080");
    }

    #[tokio::test]
    async fn test_build_state_creates_store_root() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("cache");
        let config = Config {
            host: "127.0.0.1".into(),
            port: 0,
            store_dir: root.clone(),
        };

        let state = build_state(&config).await.unwrap();
        assert!(root.is_dir());
        assert!(state.store.health_check().await.unwrap());
    }
}
