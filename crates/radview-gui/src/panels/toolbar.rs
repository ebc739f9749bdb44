use radview_core::consts::BUTTON_ZOOM_FACTOR;
use radview_core::frame::VoiWindow;

use crate::app::RadViewApp;
use crate::messages::WorkerCommand;

pub fn show(ctx: &egui::Context, app: &mut RadViewApp) {
    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.add_space(2.0);
        ui.horizontal(|ui| {
            if ui.button("Fit").on_hover_text("Fit to window").clicked() {
                app.viewport.fit();
            }
            if ui.button("1:1").on_hover_text("Native pixel size").clicked() {
                app.viewport.one_to_one();
            }
            if ui.button("+").on_hover_text("Zoom in").clicked() {
                app.viewport.zoom_by(BUTTON_ZOOM_FACTOR);
            }
            if ui.button("\u{2212}").on_hover_text("Zoom out").clicked() {
                app.viewport.zoom_by(1.0 / BUTTON_ZOOM_FACTOR);
            }

            ui.separator();

            if ui.button("\u{21ba}").on_hover_text("Rotate -90\u{b0}").clicked() {
                app.viewport.rotate_ccw();
            }
            if ui.button("\u{21bb}").on_hover_text("Rotate +90\u{b0}").clicked() {
                app.viewport.rotate_cw();
            }
            if ui
                .selectable_label(app.viewport.flip_horizontal(), "Flip H")
                .clicked()
            {
                app.viewport.toggle_flip_horizontal();
            }
            if ui
                .selectable_label(app.viewport.flip_vertical(), "Flip V")
                .clicked()
            {
                app.viewport.toggle_flip_vertical();
            }
            if ui
                .selectable_label(app.viewport.invert_colors(), "Invert")
                .clicked()
            {
                app.toggle_invert(ctx);
            }
            if ui.button("Reset").clicked() {
                app.reset_view(ctx);
            }

            ui.separator();

            show_window_controls(ui, app);

            ui.separator();

            if ui
                .selectable_label(app.ui_state.show_markers, "Markers")
                .on_hover_text("Show detection markers")
                .clicked()
            {
                app.ui_state.show_markers = !app.ui_state.show_markers;
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let is_fs = ctx.input(|i| i.viewport().fullscreen.unwrap_or(false));
                let fs_label = if is_fs { "Exit Fullscreen" } else { "Fullscreen" };
                if ui.button(fs_label).on_hover_text("Toggle fullscreen (F)").clicked() {
                    ctx.send_viewport_cmd(egui::ViewportCommand::Fullscreen(!is_fs));
                }

                let downloading = app.ui_state.export_guard.is_downloading();
                let label = if downloading {
                    "Downloading..."
                } else {
                    "Download DICOM"
                };
                if ui
                    .add_enabled(app.ui_state.can_export(), egui::Button::new(label))
                    .on_hover_text("Save the original DICOM binary")
                    .clicked()
                {
                    app.request_export(ctx);
                }
            });
        });
        ui.add_space(2.0);
    });
}

/// VOI window controls; Apply re-decodes on the worker. Only meaningful
/// while a raw frame (not a plain image) is loaded.
fn show_window_controls(ui: &mut egui::Ui, app: &mut RadViewApp) {
    let has_frame = app.ui_state.manifest.is_some();

    ui.label("WC");
    ui.add_enabled(
        has_frame,
        egui::DragValue::new(&mut app.ui_state.window_center).speed(1.0),
    );
    ui.label("WW");
    ui.add_enabled(
        has_frame,
        egui::DragValue::new(&mut app.ui_state.window_width)
            .speed(1.0)
            .range(2.0..=65535.0),
    );
    if ui
        .add_enabled(has_frame, egui::Button::new("Apply"))
        .clicked()
    {
        app.ui_state.decoding = true;
        app.send_command(WorkerCommand::Rewindow {
            window: VoiWindow {
                center: app.ui_state.window_center,
                width: app.ui_state.window_width,
            },
        });
    }
}
