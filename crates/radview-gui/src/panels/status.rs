use crate::app::RadViewApp;

pub fn show(ctx: &egui::Context, app: &mut RadViewApp) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.add_space(2.0);

        // Busy indicator
        if app.ui_state.decoding {
            ui.add(egui::ProgressBar::new(0.0).text("Windowing...").animate(true));
        } else if app.ui_state.export_guard.is_downloading() {
            ui.add(egui::ProgressBar::new(0.0).text("Exporting DICOM...").animate(true));
        } else {
            // Invisible placeholder — same height, no animation
            ui.add(egui::ProgressBar::new(0.0).text(""));
        }

        // Log area — fixed height for 4 lines, scrollable.
        let line_height = ui.text_style_height(&egui::TextStyle::Body);
        let spacing = ui.spacing().item_spacing.y;
        let log_height = line_height * 4.0 + spacing * 3.0;

        egui::ScrollArea::vertical()
            .max_height(log_height)
            .min_scrolled_height(log_height)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                if app.ui_state.log_messages.is_empty() {
                    // Reserve space for 4 empty lines to prevent layout jump.
                    for _ in 0..4 {
                        ui.label("");
                    }
                } else {
                    for msg in &app.ui_state.log_messages {
                        ui.label(msg);
                    }
                }
            });

        // Status line
        ui.horizontal(|ui| {
            let natural = app.viewport.natural();
            if !natural.is_empty() {
                ui.label(format!("{}x{}", natural.w as u32, natural.h as u32));
                ui.separator();
            }
            ui.label(format!("Zoom: {:.0}%", app.viewport.total_scale() * 100.0));
            ui.separator();
            ui.label(format!("Rot: {}\u{b0}", app.viewport.normalized_rotation()));
            if !app.ui_state.markers.is_empty() {
                ui.separator();
                ui.label(format!("{} markers", app.ui_state.markers.len()));
            }
        });

        ui.add_space(2.0);
    });
}
