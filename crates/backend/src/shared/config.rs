use serde::Deserialize;
use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub mock: MockConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// What the server does with a request no mock route matches
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UnhandledMode {
    /// Forward to `upstream` when one is configured
    Bypass,
    /// Answer 404
    #[default]
    Error,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct MockConfig {
    #[serde(default)]
    pub on_unhandled: UnhandledMode,
    /// Real admin API used for bypassed requests
    #[serde(default)]
    pub upstream: Option<String>,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "127.0.0.1"
port = 8000

[mock]
on_unhandled = "error"
"#;

const CONFIG_FILE: &str = "config.toml";

fn candidate_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            paths.push(exe_dir.join(CONFIG_FILE));
        }
    }
    paths.push(PathBuf::from(CONFIG_FILE));
    paths
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    Ok(toml::from_str(contents)?)
}

/// Load configuration from config.toml
///
/// Search order:
/// 1. Next to the executable
/// 2. Current directory
/// 3. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    for config_path in candidate_paths() {
        if config_path.exists() {
            return load_from(&config_path);
        }
        tracing::debug!("config.toml not found at: {}", config_path.display());
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

pub fn load_from(path: &Path) -> anyhow::Result<Config> {
    tracing::info!("Loading config from: {}", path.display());
    let contents = std::fs::read_to_string(path)?;
    parse_config(&contents)
}

/// Socket address the server binds to
pub fn get_bind_addr(config: &Config) -> anyhow::Result<SocketAddr> {
    let host = if config.server.host == "localhost" {
        "127.0.0.1"
    } else {
        config.server.host.as_str()
    };
    let ip: IpAddr = host
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid server host '{}': {}", config.server.host, e))?;
    Ok(SocketAddr::new(ip, config.server.port))
}
