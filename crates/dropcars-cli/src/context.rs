use std::path::Path;
use std::time::Duration;

use anyhow::{anyhow, Context as _, Result};
use dropcars_core::api::ApiClient;
use dropcars_core::config::AppConfig;
use dropcars_core::error::{DropCarsError, Recovery};
use dropcars_core::session::{FileSessionStore, Session, SessionStore};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::warn;

/// Config and session shared by all API commands.
pub struct Context {
    pub config: AppConfig,
    pub store: FileSessionStore,
}

impl Context {
    pub fn load(config_path: Option<&Path>, api_url: Option<&str>) -> Result<Self> {
        let mut config = AppConfig::load_or_default(config_path).context("Failed to load config")?;
        if let Some(url) = api_url {
            config.api.base_url = url.to_string();
        }
        let store = config.session_store();
        Ok(Self { config, store })
    }

    pub fn session(&self) -> Result<Option<Session>> {
        self.store
            .load()
            .with_context(|| format!("Failed to read session {}", self.store.path().display()))
    }

    /// Client without credentials, for `login`.
    pub fn anonymous_client(&self) -> Result<ApiClient> {
        ApiClient::from_config(&self.config.api).context("Failed to build HTTP client")
    }

    /// Client carrying the stored session token.
    pub fn client(&self) -> Result<ApiClient> {
        let session = self.session()?;
        Ok(self.anonymous_client()?.with_session(session.as_ref()))
    }

    /// Run `op` behind a spinner and apply the recovery policy to its error:
    /// auth failures clear the stored session.
    pub fn call<T>(
        &self,
        message: &str,
        op: impl FnOnce() -> dropcars_core::error::Result<T>,
    ) -> Result<T> {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")?,
        );
        pb.set_message(message.to_string());
        pb.enable_steady_tick(Duration::from_millis(80));

        let result = op();
        pb.finish_and_clear();

        result.map_err(|err| self.recover(err))
    }

    fn recover(&self, err: DropCarsError) -> anyhow::Error {
        match err.recovery() {
            Recovery::Logout => {
                if let Err(clear_err) = self.store.clear() {
                    warn!("could not clear session: {clear_err}");
                }
                anyhow!("{err}. Session cleared; run `dropcars login`.")
            }
            Recovery::Retry => anyhow!("{err}. This looks temporary; try again."),
            Recovery::Report => anyhow!(err),
        }
    }
}
