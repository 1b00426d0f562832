use crate::app::DropCarsApp;

pub fn show(ctx: &egui::Context, app: &mut DropCarsApp) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.add_space(2.0);

        if let Some(ref task) = app.ui_state.running {
            ui.add(egui::ProgressBar::new(0.0).text(format!("{task}...")).animate(true));
        } else {
            // Invisible placeholder, same height
            ui.add(egui::ProgressBar::new(0.0).text(""));
        }

        // Log area, fixed height for 4 lines, scrollable.
        let line_height = ui.text_style_height(&egui::TextStyle::Body);
        let spacing = ui.spacing().item_spacing.y;
        let log_height = line_height * 4.0 + spacing * 3.0;

        egui::ScrollArea::vertical()
            .max_height(log_height)
            .min_scrolled_height(log_height)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                if app.ui_state.log_messages.is_empty() {
                    for _ in 0..4 {
                        ui.label("");
                    }
                } else {
                    for msg in &app.ui_state.log_messages {
                        ui.label(msg);
                    }
                }
            });

        ui.horizontal(|ui| {
            if let Some(ref size) = app.viewport.image_size {
                ui.label(format!("{}x{}", size[0], size[1]));
                ui.separator();
            }
            let snap = app.viewport.transform.snapshot();
            ui.label(format!("Zoom: {:.0}%", snap.scale * 100.0));
            ui.separator();
            ui.label(format!("Offset: {:.0}, {:.0}", snap.translate_x, snap.translate_y));
            ui.separator();
            match app.ui_state.logged_in_as {
                Some(ref name) => ui.label(format!("{name} @ {}", app.ui_state.base_url)),
                None => ui.label("Not logged in"),
            };
        });

        ui.add_space(2.0);
    });
}
