use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Sent with every GET; identifies the tool and a contact URL.
pub const DEFAULT_USER_AGENT: &str =
    "colchester-electrician-notes/1.0 (+https://www.colchester-electrician.com/)";

/// Settings loaded from `config.toml`. Every key is optional; missing keys take
/// the built-in defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// `User-Agent` header value.
    pub user_agent: String,
    /// Total time allowed for one GET, in seconds.
    pub timeout_secs: u64,
    /// Time allowed to establish the connection, in seconds.
    pub connect_timeout_secs: u64,
    /// Maximum redirects followed per GET.
    pub max_redirections: u32,
    /// Output directory for downloaded PDFs, relative to the site root.
    pub asset_dir: PathBuf,
    /// Public URL prefix written into rewritten HTML (e.g. `/assets/pdf`).
    pub public_prefix: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: 60,
            connect_timeout_secs: 30,
            max_redirections: 10,
            asset_dir: PathBuf::from("assets").join("pdf"),
            public_prefix: "/assets/pdf".to_string(),
        }
    }
}

impl FetchConfig {
    /// Options for the HTTP fetcher derived from this config.
    pub fn http_options(&self) -> HttpOptions {
        HttpOptions {
            user_agent: self.user_agent.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            max_redirections: self.max_redirections,
        }
    }

    /// Public path for an asset file name, e.g. `/assets/pdf/a.pdf`.
    pub fn public_path(&self, file_name: &str) -> String {
        format!("{}/{}", self.public_prefix.trim_end_matches('/'), file_name)
    }
}

/// Per-request curl settings.
#[derive(Debug, Clone)]
pub struct HttpOptions {
    pub user_agent: String,
    pub timeout: Duration,
    pub connect_timeout: Duration,
    pub max_redirections: u32,
}

impl Default for HttpOptions {
    fn default() -> Self {
        FetchConfig::default().http_options()
    }
}

/// Location of the user config file, if one exists.
pub fn config_path() -> Result<Option<PathBuf>> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("fetch-pdfs")?;
    Ok(xdg_dirs.find_config_file("config.toml"))
}

/// Load configuration from `explicit` if given, else from the XDG config file
/// if present, else defaults. Never writes anything.
pub fn load(explicit: Option<&Path>) -> Result<FetchConfig> {
    let path = match explicit {
        Some(p) => p.to_path_buf(),
        None => match config_path()? {
            Some(p) => p,
            None => {
                tracing::debug!("no config file found, using defaults");
                return Ok(FetchConfig::default());
            }
        },
    };
    load_from(&path)
}

/// Parse a config file at `path`.
pub fn load_from(path: &Path) -> Result<FetchConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("read config {}", path.display()))?;
    let cfg: FetchConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    tracing::debug!("loaded config from {}", path.display());
    Ok(cfg)
}
