use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::consts::{
    APP_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_API_BASE_URL, DEFAULT_REQUEST_TIMEOUT_SECS,
    DEFAULT_VIEWER_HEIGHT, DEFAULT_VIEWER_WIDTH,
};
use crate::error::Result;
use crate::session::FileSessionStore;
use crate::transform::ContentSize;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub viewer: ViewerConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

/// Box the document image is rendered into.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewerConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_VIEWER_WIDTH,
            height: DEFAULT_VIEWER_HEIGHT,
        }
    }
}

impl ViewerConfig {
    pub fn content_size(&self) -> ContentSize {
        ContentSize::new(self.width, self.height)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Overrides the platform default session file location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

impl AppConfig {
    /// `<config dir>/dropcars/config.toml`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Load `path` if given, otherwise the default location. A missing
    /// default file yields the built-in defaults; a missing explicit file is
    /// an error.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }
        match Self::default_path() {
            Some(default) if default.exists() => Self::load(&default),
            _ => Ok(Self::default()),
        }
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    /// Session store at the configured path, or the platform default.
    pub fn session_store(&self) -> FileSessionStore {
        let path = self
            .session
            .path
            .clone()
            .or_else(FileSessionStore::default_path)
            .unwrap_or_else(|| PathBuf::from(crate::consts::SESSION_FILE_NAME));
        FileSessionStore::new(path)
    }
}
