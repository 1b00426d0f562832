use std::sync::mpsc;

use anyhow::{Context, Result};
use dropcars_core::api::ApiClient;
use dropcars_core::config::AppConfig;
use dropcars_core::error::{DropCarsError, Recovery};
use dropcars_core::session::{FileSessionStore, SessionStore};
use tracing::{info, warn};

use crate::messages::WorkerResult;

use super::dispatch::{send, send_error};

/// Client, config and session store living on the worker thread.
pub(crate) struct WorkerState {
    pub config: AppConfig,
    pub client: ApiClient,
    pub store: FileSessionStore,
    pub username: Option<String>,
}

impl WorkerState {
    pub fn init() -> Result<Self> {
        let config = AppConfig::load_or_default(None).context("Failed to load config")?;
        let store = config.session_store();
        let session = match store.load() {
            Ok(session) => session,
            Err(e) => {
                warn!("ignoring unreadable session {}: {e}", store.path().display());
                None
            }
        };
        let client = ApiClient::from_config(&config.api)
            .context("Failed to build HTTP client")?
            .with_session(session.as_ref());
        info!(base_url = %config.api.base_url, "worker ready");

        Ok(Self {
            username: session.map(|s| s.username),
            config,
            client,
            store,
        })
    }

    pub fn announce(&self, tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context) {
        send(
            tx,
            ctx,
            WorkerResult::Ready {
                base_url: self.config.api.base_url.clone(),
                username: self.username.clone(),
                viewer: self.config.viewer.content_size(),
            },
        );
    }

    /// Drop the in-memory token and the stored session.
    pub fn forget_session(&mut self) {
        self.client.clear_token();
        self.username = None;
        if let Err(e) = self.store.clear() {
            warn!("could not clear session: {e}");
        }
    }

    /// Apply the recovery policy to a failed call and tell the UI about it.
    pub fn report(
        &mut self,
        action: &str,
        err: DropCarsError,
        tx: &mpsc::Sender<WorkerResult>,
        ctx: &egui::Context,
    ) {
        match err.recovery() {
            Recovery::Logout => {
                self.forget_session();
                send(tx, ctx, WorkerResult::LoggedOut);
                send_error(tx, ctx, format!("{action}: {err}. Please log in again."));
            }
            Recovery::Retry => {
                send_error(tx, ctx, format!("{action}: {err}. This looks temporary; try again."));
            }
            Recovery::Report => {
                send_error(tx, ctx, format!("{action}: {err}"));
            }
        }
    }
}
