use std::sync::mpsc;

use dropcars_core::api::{AccountFilter, DocumentStatusUpdate};
use dropcars_core::session::SessionStore;
use tracing::warn;

use crate::messages::WorkerResult;

use super::dispatch::{send, send_log};
use super::state::WorkerState;

pub(super) fn handle_login(
    state: &mut WorkerState,
    username: &str,
    password: &str,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    match state.client.login(username, password) {
        Ok(session) => {
            if let Err(e) = state.store.save(&session) {
                warn!("could not save session: {e}");
                send_log(tx, ctx, format!("Session not saved: {e}"));
            }
            state.username = Some(session.username.clone());
            send(
                tx,
                ctx,
                WorkerResult::LoggedIn {
                    username: session.username,
                },
            );
        }
        Err(e) => state.report("Login failed", e, tx, ctx),
    }
}

pub(super) fn handle_logout(
    state: &mut WorkerState,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    state.forget_session();
    send(tx, ctx, WorkerResult::LoggedOut);
}

pub(super) fn handle_load_accounts(
    state: &mut WorkerState,
    filter: &AccountFilter,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    match state.client.list_accounts(filter) {
        Ok(accounts) => send(tx, ctx, WorkerResult::Accounts { accounts }),
        Err(e) => state.report("Loading accounts failed", e, tx, ctx),
    }
}

pub(super) fn handle_load_documents(
    state: &mut WorkerState,
    account_id: String,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    match state.client.list_documents(&account_id) {
        Ok(documents) => send(
            tx,
            ctx,
            WorkerResult::Documents {
                account_id,
                documents,
            },
        ),
        Err(e) => state.report("Loading documents failed", e, tx, ctx),
    }
}

pub(super) fn handle_set_document_status(
    state: &mut WorkerState,
    document_id: &str,
    update: &DocumentStatusUpdate,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    match state.client.set_document_status(document_id, update) {
        Ok(document) => send(tx, ctx, WorkerResult::DocumentUpdated { document }),
        Err(e) => state.report("Updating document failed", e, tx, ctx),
    }
}
