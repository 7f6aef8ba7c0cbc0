#[cfg(feature = "ssr")]
use std::sync::OnceLock;

use cfg_if::cfg_if;
use leptos::*;
use serde::{Deserialize, Serialize};

#[cfg(feature = "ssr")]
use crate::utils::{Error, ErrorKind, Result};

#[cfg(feature = "ssr")]
static CONFIG: OnceLock<Config> = OnceLock::new();

#[derive(Debug, PartialEq, Eq, Clone, Deserialize, Serialize)]
pub struct Config {
    /// 0 trace, 1 debug, 2 info, 3 warn, 4 error
    #[serde(default = "default_log_level")]
    pub log_level: u8,
    #[serde(default)]
    pub frontend: FrontendConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            frontend: FrontendConfig::default(),
        }
    }
}

fn default_log_level() -> u8 {
    2
}

/// Settings the browser needs, shipped through a server function
#[derive(Debug, Default, PartialEq, Eq, Clone, Deserialize, Serialize)]
pub struct FrontendConfig {
    /// origin of the contest api, empty means same origin as the page
    #[serde(default)]
    pub api_server: String,
}

impl FrontendConfig {
    pub fn contests_url(&self) -> String {
        format!("{}/api/contests", self.api_server.trim_end_matches('/'))
    }
}

#[cfg(feature = "ssr")]
pub async fn init_server_config() -> Result<&'static Config> {
    let config = load_server_config().await?;
    Ok(CONFIG.get_or_init(move || config))
}

#[cfg(feature = "ssr")]
async fn load_server_config() -> Result<Config> {
    use std::env::var;

    use tokio::{fs, io::AsyncReadExt};

    const DEFAULT_CONFIG_PATH: &str = "config.toml";
    let config_path = var("CONFIG_PATH")
        .ok()
        .unwrap_or(DEFAULT_CONFIG_PATH.into());

    if fs::metadata(&config_path).await.is_ok() {
        let mut buf = String::new();
        fs::File::open(&config_path)
            .await?
            .read_to_string(&mut buf)
            .await?;
        return Ok(toml::from_str(&buf)?);
    }
    let default_config = Config::default();
    let default_toml = toml::to_string_pretty(&default_config)
        .map_err(|err| Error::new(ErrorKind::Internal, err.to_string()))?;
    fs::write(&config_path, default_toml).await?;
    tracing::info!(path = %config_path, "write default config");
    Ok(default_config)
}

#[cfg(feature = "ssr")]
pub fn server_config() -> Config {
    CONFIG.get().cloned().unwrap_or_default()
}

#[server(GetFrontendConfig, "/srv")]
async fn get_frontend_config() -> Result<FrontendConfig, ServerFnError> {
    Ok(server_config().frontend)
}

pub async fn frontend_config() -> FrontendConfig {
    cfg_if! { if #[cfg(feature = "ssr")] {
        server_config().frontend
    } else {
        use gloo::storage::{SessionStorage, Storage};
        const FRONTEND_CONFIG_KEY: &str = "frontend_config";
        if let Ok(config) = SessionStorage::get(FRONTEND_CONFIG_KEY) {
            return config;
        }
        match get_frontend_config().await {
            Ok(config) => {
                if let Err(err) = SessionStorage::set(FRONTEND_CONFIG_KEY, &config) {
                    tracing::warn!(%err, "cannot cache frontend config");
                }
                config
            }
            Err(err) => {
                tracing::warn!(%err, "fall back to default frontend config");
                FrontendConfig::default()
            }
        }
    }}
}
