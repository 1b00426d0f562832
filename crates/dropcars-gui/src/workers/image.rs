use std::sync::mpsc;
use std::time::Instant;

use dropcars_core::io::load_image;

use crate::messages::WorkerResult;

use super::dispatch::{send, send_log};
use super::state::WorkerState;

pub(super) fn handle_load_image(
    state: &mut WorkerState,
    uri: String,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    let start = Instant::now();
    match load_image(&uri, state.client.transport()) {
        Ok(image) => {
            send_log(
                tx,
                ctx,
                format!(
                    "Loaded {}x{} image in {:.0}ms",
                    image.width,
                    image.height,
                    start.elapsed().as_secs_f64() * 1000.0
                ),
            );
            send(tx, ctx, WorkerResult::ImageLoaded { uri, image });
        }
        Err(e) => state.report("Loading image failed", e, tx, ctx),
    }
}
