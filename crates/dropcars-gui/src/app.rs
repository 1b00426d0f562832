use std::sync::mpsc;

use dropcars_core::api::AccountFilter;
use dropcars_core::io::DecodedImage;

use crate::convert::decoded_to_color_image;
use crate::messages::{WorkerCommand, WorkerResult};
use crate::panels;
use crate::states::{UIState, ViewportState};
use crate::workers;

pub struct DropCarsApp {
    pub cmd_tx: mpsc::Sender<WorkerCommand>,
    pub result_rx: mpsc::Receiver<WorkerResult>,
    pub ui_state: UIState,
    pub viewport: ViewportState,
    pub show_about: bool,
}

impl DropCarsApp {
    pub fn new(ctx: &egui::Context) -> Self {
        let (result_tx, result_rx) = mpsc::channel();
        let cmd_tx = workers::spawn_worker(result_tx, ctx.clone());

        Self {
            cmd_tx,
            result_rx,
            ui_state: UIState::default(),
            viewport: ViewportState::default(),
            show_about: false,
        }
    }

    /// Drain all pending results from the worker.
    fn poll_results(&mut self, ctx: &egui::Context) {
        while let Ok(result) = self.result_rx.try_recv() {
            match result {
                WorkerResult::Ready {
                    base_url,
                    username,
                    viewer,
                } => {
                    self.ui_state.add_log(format!("API: {base_url}"));
                    self.ui_state.base_url = base_url;
                    self.viewport.resize(viewer);
                    if let Some(name) = username {
                        self.ui_state.add_log(format!("Restored session for {name}"));
                        self.ui_state.logged_in_as = Some(name);
                        self.request_accounts();
                    }
                }
                WorkerResult::LoggedIn { username } => {
                    self.ui_state.running = None;
                    self.ui_state.password.clear();
                    self.ui_state.add_log(format!("Logged in as {username}"));
                    self.ui_state.logged_in_as = Some(username);
                    self.request_accounts();
                }
                WorkerResult::LoggedOut => {
                    self.ui_state.running = None;
                    self.ui_state.clear_session_data();
                    self.ui_state.add_log("Logged out".into());
                }
                WorkerResult::Accounts { accounts } => {
                    self.ui_state.running = None;
                    self.ui_state.add_log(format!("{} accounts", accounts.len()));
                    self.ui_state.accounts = accounts;
                }
                WorkerResult::Documents {
                    account_id,
                    documents,
                } => {
                    self.ui_state.running = None;
                    // Ignore answers for an account that is no longer selected.
                    if self.ui_state.selected_account.as_deref() == Some(account_id.as_str()) {
                        self.ui_state.documents = documents;
                        self.ui_state.selected_document = None;
                    }
                }
                WorkerResult::DocumentUpdated { document } => {
                    self.ui_state.running = None;
                    self.ui_state.add_log(format!(
                        "{} {} marked {}",
                        document.document_type, document.id, document.status
                    ));
                    self.ui_state.reject_reason.clear();
                    self.ui_state.replace_document(document);
                }
                WorkerResult::ImageLoaded { uri, image } => {
                    self.ui_state.running = None;
                    self.update_viewport_texture(ctx, &image, &uri);
                }
                WorkerResult::Error { message } => {
                    self.ui_state.running = None;
                    self.ui_state.add_log(format!("ERROR: {message}"));
                }
                WorkerResult::Log { message } => {
                    self.ui_state.add_log(message);
                }
            }
        }
    }

    fn update_viewport_texture(&mut self, ctx: &egui::Context, image: &DecodedImage, label: &str) {
        let color_image = decoded_to_color_image(image);
        let size = color_image.size;
        let texture = ctx.load_texture("viewport", color_image, egui::TextureOptions::LINEAR);
        self.viewport.texture = Some(texture);
        self.viewport.image_size = Some(size);
        self.viewport.viewing_label = label.to_string();
        // Every image starts unzoomed.
        self.viewport.reset();
    }

    pub fn send_command(&self, cmd: WorkerCommand) {
        let _ = self.cmd_tx.send(cmd);
    }

    /// Send `cmd` and show `label` in the status bar until the worker answers.
    pub fn run_command(&mut self, label: &str, cmd: WorkerCommand) {
        self.ui_state.running = Some(label.to_string());
        self.send_command(cmd);
    }

    pub fn request_accounts(&mut self) {
        let filter = AccountFilter {
            account_type: self.ui_state.type_filter,
            status: self.ui_state.status_filter,
        };
        self.run_command("Loading accounts", WorkerCommand::LoadAccounts { filter });
    }
}

impl eframe::App for DropCarsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_results(ctx);

        panels::menu_bar::show(ctx, self);
        panels::status::show(ctx, self);
        panels::controls::show(ctx, self);
        panels::viewport::show(ctx, self);

        // About dialog
        if self.show_about {
            egui::Window::new("About Drop Cars Admin")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("Drop Cars Admin");
                        ui.label("Account and document review");
                        ui.add_space(8.0);
                        ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                        ui.add_space(8.0);
                        if ui.button("Close").clicked() {
                            self.show_about = false;
                        }
                    });
                });
        }
    }
}
