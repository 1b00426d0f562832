use std::sync::mpsc;

use crate::messages::{WorkerCommand, WorkerResult};

use super::state::WorkerState;
use super::{admin, image};

/// Spawn the worker thread. Returns the command sender.
pub fn spawn_worker(
    result_tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) -> mpsc::Sender<WorkerCommand> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<WorkerCommand>();

    std::thread::Builder::new()
        .name("dropcars-worker".into())
        .spawn(move || {
            worker_loop(cmd_rx, result_tx, ctx);
        })
        .expect("Failed to spawn worker thread");

    cmd_tx
}

pub(crate) fn send(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, result: WorkerResult) {
    let _ = tx.send(result);
    ctx.request_repaint();
}

pub(crate) fn send_log(
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
    msg: impl Into<String>,
) {
    send(
        tx,
        ctx,
        WorkerResult::Log {
            message: msg.into(),
        },
    );
}

pub(crate) fn send_error(
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
    msg: impl Into<String>,
) {
    send(
        tx,
        ctx,
        WorkerResult::Error {
            message: msg.into(),
        },
    );
}

fn worker_loop(
    cmd_rx: mpsc::Receiver<WorkerCommand>,
    tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) {
    let mut state = match WorkerState::init() {
        Ok(state) => state,
        Err(e) => {
            send_error(&tx, &ctx, format!("Worker failed to start: {e:#}"));
            return;
        }
    };
    state.announce(&tx, &ctx);

    while let Ok(cmd) = cmd_rx.recv() {
        match cmd {
            WorkerCommand::Login { username, password } => {
                admin::handle_login(&mut state, &username, &password, &tx, &ctx);
            }
            WorkerCommand::Logout => {
                admin::handle_logout(&mut state, &tx, &ctx);
            }
            WorkerCommand::LoadAccounts { filter } => {
                admin::handle_load_accounts(&mut state, &filter, &tx, &ctx);
            }
            WorkerCommand::LoadDocuments { account_id } => {
                admin::handle_load_documents(&mut state, account_id, &tx, &ctx);
            }
            WorkerCommand::SetDocumentStatus {
                document_id,
                update,
            } => {
                admin::handle_set_document_status(&mut state, &document_id, &update, &tx, &ctx);
            }
            WorkerCommand::LoadImage { uri } => {
                image::handle_load_image(&mut state, uri, &tx, &ctx);
            }
        }
    }
}
