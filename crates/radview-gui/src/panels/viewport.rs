use radview_core::consts::{DOUBLE_CLICK_ZOOM_FACTOR, WHEEL_ZOOM_STEP};
use radview_core::viewport::{Size, Vec2};

use crate::app::RadViewApp;

pub fn show(ctx: &egui::Context, app: &mut RadViewApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let rect = ui.available_rect_before_wrap();
        paint_background(ui, rect);

        app.viewport
            .set_container_size(Size::new(rect.width(), rect.height()));

        let texture_id = app.texture.as_ref().map(|t| t.id());

        if let Some(texture_id) = texture_id {
            let response = ui.allocate_rect(rect, egui::Sense::click_and_drag());

            handle_zoom(ui, &response, app, rect);
            handle_pan(&response, app);
            handle_keys(ctx, app);

            if response.double_clicked() {
                app.viewport.zoom_by(DOUBLE_CLICK_ZOOM_FACTOR);
            }

            draw_image(ui, texture_id, rect, app);

            if app.ui_state.show_markers {
                draw_markers(ui, rect, app);
            }

            draw_hud(ctx, ui, rect, app);
            draw_viewing_label(ui, rect, &app.ui_state.viewing_label);
        } else {
            show_placeholder(ui);
        }
    });
}

fn paint_background(ui: &egui::Ui, rect: egui::Rect) {
    ui.painter().rect_filled(rect, 0.0, egui::Color32::BLACK);
}

fn handle_zoom(ui: &egui::Ui, response: &egui::Response, app: &mut RadViewApp, rect: egui::Rect) {
    let scroll_delta = ui.input(|i| i.smooth_scroll_delta.y);
    if scroll_delta == 0.0 || !response.hovered() {
        return;
    }

    let dir = if scroll_delta > 0.0 { 1.0 } else { -1.0 };
    let factor = 1.0 + WHEEL_ZOOM_STEP * dir;

    // Zoom toward the cursor so the sample under it stays put.
    if let Some(mouse_pos) = ui.input(|i| i.pointer.hover_pos()) {
        let from_center = mouse_pos - rect.center();
        app.viewport
            .zoom_at(factor, Vec2::new(from_center.x, from_center.y));
    } else {
        app.viewport.zoom_by(factor);
    }
}

fn handle_pan(response: &egui::Response, app: &mut RadViewApp) {
    if response.dragged_by(egui::PointerButton::Primary) {
        let delta = response.drag_delta();
        app.viewport.pan_by(delta.x, delta.y);
    }
}

fn handle_keys(ctx: &egui::Context, app: &mut RadViewApp) {
    if ctx.wants_keyboard_input() {
        return;
    }
    if ctx.input(|i| i.key_pressed(egui::Key::F)) {
        let is_fs = ctx.input(|i| i.viewport().fullscreen.unwrap_or(false));
        ctx.send_viewport_cmd(egui::ViewportCommand::Fullscreen(!is_fs));
    }
    if ctx.input(|i| i.key_pressed(egui::Key::Num0)) {
        app.viewport.fit();
    }
    if ctx.input(|i| i.key_pressed(egui::Key::Num1)) {
        app.viewport.one_to_one();
    }
    if ctx.input(|i| i.key_pressed(egui::Key::R)) {
        app.viewport.rotate_cw();
    }
}

fn draw_image(ui: &egui::Ui, texture_id: egui::TextureId, rect: egui::Rect, app: &RadViewApp) {
    let natural = app.viewport.natural();
    if natural.is_empty() {
        return;
    }

    let scale = app.viewport.total_scale();
    let size = egui::vec2(natural.w * scale, natural.h * scale);
    let pan = app.viewport.pan();
    let center = rect.center() + egui::vec2(pan.x, pan.y);
    let img_rect = egui::Rect::from_center_size(center, size);

    // Flips ride on the texture coordinates; rotation spins the mesh about
    // its center.
    let (u0, u1) = if app.viewport.flip_horizontal() {
        (1.0, 0.0)
    } else {
        (0.0, 1.0)
    };
    let (v0, v1) = if app.viewport.flip_vertical() {
        (1.0, 0.0)
    } else {
        (0.0, 1.0)
    };
    let angle = (app.viewport.normalized_rotation() as f32).to_radians();

    egui::Image::from_texture((texture_id, size))
        .uv(egui::Rect::from_min_max(
            egui::pos2(u0, v0),
            egui::pos2(u1, v1),
        ))
        .rotate(angle, egui::Vec2::splat(0.5))
        .paint_at(ui, img_rect);
}

fn draw_markers(ui: &egui::Ui, rect: egui::Rect, app: &RadViewApp) {
    let painter = ui.painter_at(rect);
    for marker in &app.ui_state.markers {
        let projected = app.viewport.project(marker.position());
        let pos = rect.min + egui::vec2(projected.x, projected.y);
        if !rect.contains(pos) {
            continue;
        }

        painter.circle_stroke(
            pos,
            7.0,
            egui::Stroke::new(2.0, egui::Color32::from_rgb(239, 68, 68)),
        );
        let text = match marker.confidence {
            Some(c) => format!("{} {:.0}%", marker.label, c * 100.0),
            None => marker.label.clone(),
        };
        painter.text(
            pos + egui::vec2(10.0, -10.0),
            egui::Align2::LEFT_BOTTOM,
            text,
            egui::FontId::proportional(12.0),
            egui::Color32::from_white_alpha(220),
        );
    }
}

fn draw_hud(ctx: &egui::Context, ui: &egui::Ui, rect: egui::Rect, app: &RadViewApp) {
    let mut lines = vec![
        format!("Zoom: {:.0}%", app.viewport.total_scale() * 100.0),
        format!("Rot: {}\u{b0}", app.viewport.normalized_rotation()),
    ];
    if ctx.input(|i| i.viewport().fullscreen.unwrap_or(false)) {
        lines.push("FS: ON".into());
    }

    let mut pos = rect.right_top() + egui::vec2(-8.0, 8.0);
    for line in lines {
        ui.painter().text(
            pos,
            egui::Align2::RIGHT_TOP,
            line,
            egui::FontId::proportional(12.0),
            egui::Color32::from_white_alpha(200),
        );
        pos.y += 16.0;
    }
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
            egui::RichText::new("Open a frame manifest or image to begin")
                .size(18.0)
                .color(egui::Color32::from_gray(100)),
        );
    });
}
