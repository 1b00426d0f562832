use dropcars_core::api::{
    Account, AccountStatus, AccountType, DocumentStatus, DocumentStatusUpdate,
};

use crate::app::DropCarsApp;
use crate::messages::WorkerCommand;

use super::section_header;

const LEFT_PANEL_WIDTH: f32 = 300.0;

pub fn show(ctx: &egui::Context, app: &mut DropCarsApp) {
    egui::SidePanel::left("controls")
        .default_width(LEFT_PANEL_WIDTH)
        .resizable(true)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.set_min_width(LEFT_PANEL_WIDTH - 20.0);

                login_section(ui, app);
                if app.ui_state.logged_in_as.is_some() {
                    ui.separator();
                    accounts_section(ui, app);
                    ui.separator();
                    documents_section(ui, app);
                }
            });
        });
}

fn login_section(ui: &mut egui::Ui, app: &mut DropCarsApp) {
    section_header(ui, "Session", None);
    ui.add_space(4.0);

    if let Some(name) = app.ui_state.logged_in_as.clone() {
        ui.label(format!("Signed in as {name}"));
        if ui.add_enabled(!app.ui_state.is_busy(), egui::Button::new("Log out")).clicked() {
            app.run_command("Logging out", WorkerCommand::Logout);
        }
        return;
    }

    egui::Grid::new("login_form").num_columns(2).show(ui, |ui| {
        ui.label("Username");
        ui.text_edit_singleline(&mut app.ui_state.username);
        ui.end_row();

        ui.label("Password");
        ui.add(egui::TextEdit::singleline(&mut app.ui_state.password).password(true));
        ui.end_row();
    });

    let ready = !app.ui_state.is_busy()
        && !app.ui_state.username.trim().is_empty()
        && !app.ui_state.password.is_empty();
    if ui.add_enabled(ready, egui::Button::new("Log in")).clicked() {
        let cmd = WorkerCommand::Login {
            username: app.ui_state.username.trim().to_string(),
            password: app.ui_state.password.clone(),
        };
        app.run_command("Logging in", cmd);
    }
}

fn accounts_section(ui: &mut egui::Ui, app: &mut DropCarsApp) {
    let count = format!("{}", app.ui_state.accounts.len());
    section_header(ui, "Accounts", Some(&count));
    ui.add_space(4.0);

    let mut changed = optional_combo(
        ui,
        "Type",
        &mut app.ui_state.type_filter,
        &AccountType::ALL,
    );
    changed |= optional_combo(
        ui,
        "Status",
        &mut app.ui_state.status_filter,
        &AccountStatus::ALL,
    );

    let refresh = ui
        .add_enabled(!app.ui_state.is_busy(), egui::Button::new("Refresh"))
        .clicked();
    if changed || refresh {
        app.request_accounts();
    }

    ui.add_space(4.0);
    let mut clicked: Option<String> = None;
    for account in &app.ui_state.accounts {
        let selected = app.ui_state.selected_account.as_deref() == Some(account.id.as_str());
        if ui.selectable_label(selected, account_label(account)).clicked() {
            clicked = Some(account.id.clone());
        }
    }

    if let Some(account_id) = clicked {
        app.ui_state.selected_account = Some(account_id.clone());
        app.ui_state.documents.clear();
        app.ui_state.selected_document = None;
        app.run_command("Loading documents", WorkerCommand::LoadDocuments { account_id });
    }
}

fn documents_section(ui: &mut egui::Ui, app: &mut DropCarsApp) {
    section_header(ui, "Documents", None);
    ui.add_space(4.0);

    if app.ui_state.selected_account.is_none() {
        ui.small("Select an account");
        return;
    }
    if app.ui_state.documents.is_empty() {
        ui.small("No documents");
        return;
    }

    let mut clicked: Option<(String, String)> = None;
    for doc in &app.ui_state.documents {
        let selected = app.ui_state.selected_document.as_deref() == Some(doc.id.as_str());
        let text = format!("{} [{}]", doc.document_type, doc.status);
        if ui.selectable_label(selected, text).clicked() {
            clicked = Some((doc.id.clone(), doc.image_url.clone()));
        }
    }

    if let Some((id, uri)) = clicked {
        app.ui_state.selected_document = Some(id);
        app.run_command("Loading image", WorkerCommand::LoadImage { uri });
    }

    let Some(doc) = app.ui_state.selected_document().cloned() else {
        return;
    };

    ui.add_space(8.0);
    if let Some(ref reason) = doc.reason {
        ui.small(format!("Reason: {reason}"));
    }
    ui.label("Rejection reason");
    ui.text_edit_singleline(&mut app.ui_state.reject_reason);

    let idle = !app.ui_state.is_busy();
    let reason = app.ui_state.reject_reason.trim().to_string();
    ui.horizontal(|ui| {
        let can_verify = idle && doc.status != DocumentStatus::Verified;
        if ui.add_enabled(can_verify, egui::Button::new("Verify")).clicked() {
            send_verdict(app, &doc.id, DocumentStatus::Verified, None);
        }
        let can_reject = idle && !reason.is_empty();
        if ui.add_enabled(can_reject, egui::Button::new("Reject")).clicked() {
            send_verdict(app, &doc.id, DocumentStatus::Invalid, Some(reason.clone()));
        }
    });
}

fn send_verdict(
    app: &mut DropCarsApp,
    document_id: &str,
    status: DocumentStatus,
    reason: Option<String>,
) {
    let cmd = WorkerCommand::SetDocumentStatus {
        document_id: document_id.to_string(),
        update: DocumentStatusUpdate { status, reason },
    };
    app.run_command("Updating document", cmd);
}

fn account_label(account: &Account) -> String {
    format!("{} ({}, {})", account.name, account.account_type, account.status)
}

/// ComboBox with an extra "Any" entry. Returns `true` if the value changed.
fn optional_combo<T: PartialEq + Copy + ToString>(
    ui: &mut egui::Ui,
    label: &str,
    current: &mut Option<T>,
    options: &[T],
) -> bool {
    let selected_text = current.map(|c| c.to_string()).unwrap_or_else(|| "Any".into());
    let resp = egui::ComboBox::from_label(label)
        .selected_text(selected_text)
        .show_ui(ui, |ui| {
            let mut changed = ui.selectable_value(current, None, "Any").changed();
            for &choice in options {
                if ui
                    .selectable_value(current, Some(choice), choice.to_string())
                    .changed()
                {
                    changed = true;
                }
            }
            changed
        });
    resp.inner == Some(true)
}
