use crate::app::RadViewApp;
use crate::messages::WorkerCommand;

pub fn show(ctx: &egui::Context, app: &mut RadViewApp) {
    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                let open_shortcut =
                    egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O);
                if ui
                    .add(
                        egui::Button::new("Open Manifest...")
                            .shortcut_text(ctx.format_shortcut(&open_shortcut)),
                    )
                    .clicked()
                {
                    ui.close();
                    open_manifest(app);
                }

                if ui.button("Open Image...").clicked() {
                    ui.close();
                    open_image(app);
                }

                ui.separator();

                let export_shortcut =
                    egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::E);
                let can_export = app.ui_state.can_export();
                if ui
                    .add_enabled(
                        can_export,
                        egui::Button::new("Export DICOM...")
                            .shortcut_text(ctx.format_shortcut(&export_shortcut)),
                    )
                    .clicked()
                {
                    ui.close();
                    app.request_export(ctx);
                }

                ui.separator();

                let quit_shortcut =
                    egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q);
                if ui
                    .add(
                        egui::Button::new("Quit")
                            .shortcut_text(ctx.format_shortcut(&quit_shortcut)),
                    )
                    .clicked()
                {
                    ui.close();
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button("About").clicked() {
                    ui.close();
                    app.show_about = true;
                }
            });
        });

        // Keyboard shortcuts (consumed outside menus)
        if ctx.input_mut(|i| {
            i.consume_shortcut(&egui::KeyboardShortcut::new(
                egui::Modifiers::COMMAND,
                egui::Key::O,
            ))
        }) {
            open_manifest(app);
        }
        if ctx.input_mut(|i| {
            i.consume_shortcut(&egui::KeyboardShortcut::new(
                egui::Modifiers::COMMAND,
                egui::Key::E,
            ))
        }) && app.ui_state.can_export()
        {
            app.request_export(ctx);
        }
        if ctx.input_mut(|i| {
            i.consume_shortcut(&egui::KeyboardShortcut::new(
                egui::Modifiers::COMMAND,
                egui::Key::Q,
            ))
        }) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    });
}

fn open_manifest(app: &mut RadViewApp) {
    let cmd_tx = app.cmd_tx.clone();
    std::thread::spawn(move || {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Frame manifests", &["toml"])
            .add_filter("All files", &["*"])
            .pick_file()
        {
            let _ = cmd_tx.send(WorkerCommand::LoadManifest { path });
        }
    });
}

fn open_image(app: &mut RadViewApp) {
    let cmd_tx = app.cmd_tx.clone();
    std::thread::spawn(move || {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Images", &["png", "jpg", "jpeg"])
            .pick_file()
        {
            let _ = cmd_tx.send(WorkerCommand::LoadImage { path });
        }
    });
}
