use dropcars_core::transform::{ContentSize, TransformSnapshot};

use crate::app::DropCarsApp;

pub fn show(ctx: &egui::Context, app: &mut DropCarsApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let panel = ui.available_rect_before_wrap();
        paint_background(ui, panel);

        let content = app.viewport.content();
        let box_rect = egui::Rect::from_center_size(
            panel.center(),
            egui::vec2(content.width(), content.height()),
        );

        let texture_info = app
            .viewport
            .texture
            .as_ref()
            .map(|t| (t.id(), [t.size()[0] as f32, t.size()[1] as f32]));

        if let Some((texture_id, tex_size)) = texture_info {
            let response = ui.allocate_rect(box_rect, egui::Sense::click_and_drag());

            handle_pinch(ui, &response, app);
            handle_pan(&response, app);

            if response.double_clicked() {
                app.viewport.reset();
            }

            let image_size = resolve_image_size(app, tex_size);
            let snap = app.viewport.transform.snapshot();
            let img_rect = compute_img_rect(box_rect, content, image_size, &snap);
            draw_image(ui, box_rect, texture_id, img_rect);
            draw_viewing_label(ui, panel, &app.viewport.viewing_label);
        } else {
            show_placeholder(ui);
        }
    });
}

fn paint_background(ui: &egui::Ui, rect: egui::Rect) {
    ui.painter()
        .rect_filled(rect, 0.0, egui::Color32::from_gray(30));
}

fn resolve_image_size(app: &DropCarsApp, tex_size: [f32; 2]) -> egui::Vec2 {
    if let Some(size) = app.viewport.image_size {
        egui::vec2(size[0] as f32, size[1] as f32)
    } else {
        egui::vec2(tex_size[0], tex_size[1])
    }
}

/// Touch pinch drives a continuous gesture; ctrl+scroll is one pinch per step.
fn handle_pinch(ui: &egui::Ui, response: &egui::Response, app: &mut DropCarsApp) {
    let (multi_touch, zoom_delta) = ui.input(|i| (i.multi_touch(), i.zoom_delta()));

    match multi_touch {
        Some(touch) => app.viewport.pinch_by(touch.zoom_delta),
        None => {
            app.viewport.end_pinch();
            if zoom_delta != 1.0 && response.hovered() {
                app.viewport.zoom_step(zoom_delta);
            }
        }
    }
}

fn handle_pan(response: &egui::Response, app: &mut DropCarsApp) {
    if response.drag_started() {
        app.viewport.begin_pan();
    }
    if response.dragged() {
        app.viewport.pan_by(response.drag_delta());
    }
    if response.drag_stopped() {
        app.viewport.end_pan();
    }
}

/// Fit the image inside the transformed box, keeping its aspect ratio.
fn compute_img_rect(
    box_rect: egui::Rect,
    content: ContentSize,
    image_size: egui::Vec2,
    snap: &TransformSnapshot,
) -> egui::Rect {
    let layer = snap.image_rect(content, box_rect.min.x, box_rect.min.y);
    let layer = egui::Rect::from_min_max(
        egui::pos2(layer.x, layer.y),
        egui::pos2(layer.right(), layer.bottom()),
    );
    let fit = (layer.width() / image_size.x).min(layer.height() / image_size.y);
    egui::Rect::from_center_size(layer.center(), image_size * fit)
}

fn draw_image(ui: &egui::Ui, box_rect: egui::Rect, texture_id: egui::TextureId, img_rect: egui::Rect) {
    let painter = ui.painter_at(box_rect);
    painter.rect_filled(box_rect, 0.0, egui::Color32::BLACK);
    painter.image(
        texture_id,
        img_rect,
        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
        egui::Color32::WHITE,
    );
}

fn draw_viewing_label(ui: &egui::Ui, rect: egui::Rect, label: &str) {
    if label.is_empty() {
        return;
    }
    let label_pos = rect.left_top() + egui::vec2(8.0, 8.0);
    ui.painter().text(
        label_pos,
        egui::Align2::LEFT_TOP,
        label,
        egui::FontId::proportional(14.0),
        egui::Color32::from_white_alpha(200),
    );
}

fn show_placeholder(ui: &mut egui::Ui) {
    ui.centered_and_justified(|ui| {
        ui.label(
            egui::RichText::new("Select a document or open an image")
                .size(18.0)
                .color(egui::Color32::from_gray(100)),
        );
    });
}
