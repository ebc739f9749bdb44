use std::sync::mpsc;

use radview_core::consts::DEFAULT_ROTATION_DEGREES;
use radview_core::raster::DisplayRaster;
use radview_core::viewport::{Size, ViewportState};

use crate::convert::raster_to_color_image;
use crate::messages::{WorkerCommand, WorkerResult};
use crate::panels;
use crate::state::UIState;
use crate::worker;

pub struct RadViewApp {
    pub cmd_tx: mpsc::Sender<WorkerCommand>,
    pub result_tx: mpsc::Sender<WorkerResult>,
    result_rx: mpsc::Receiver<WorkerResult>,
    pub ui_state: UIState,
    pub viewport: ViewportState,
    pub texture: Option<egui::TextureHandle>,
    raster: Option<DisplayRaster>,
    pub show_about: bool,
}

impl RadViewApp {
    pub fn new(ctx: &egui::Context) -> Self {
        let (result_tx, result_rx) = mpsc::channel();
        let cmd_tx = worker::spawn_worker(result_tx.clone(), ctx.clone());

        Self {
            cmd_tx,
            result_tx,
            result_rx,
            ui_state: UIState::default(),
            viewport: ViewportState::new(DEFAULT_ROTATION_DEGREES),
            texture: None,
            raster: None,
            show_about: false,
        }
    }

    /// Drain all pending results from the worker.
    fn poll_results(&mut self, ctx: &egui::Context) {
        while let Ok(result) = self.result_rx.try_recv() {
            match result {
                WorkerResult::ManifestLoaded {
                    path,
                    manifest,
                    raster,
                } => {
                    self.ui_state.decoding = false;
                    self.ui_state.add_log(format!(
                        "Opened: {} ({}x{}, {} markers)",
                        path.display(),
                        manifest.width,
                        manifest.height,
                        manifest.markers.len()
                    ));
                    self.ui_state.window_center = manifest.window.center;
                    self.ui_state.window_width = manifest.window.width;
                    self.ui_state.markers = manifest.markers.clone();
                    self.ui_state.source_dicom = manifest.source_dicom_path(&path);
                    let label = manifest
                        .weld_id
                        .clone()
                        .or_else(|| manifest.study.clone())
                        .unwrap_or_else(|| path.display().to_string());
                    self.ui_state.manifest = Some(manifest);
                    self.ui_state.manifest_path = Some(path);
                    self.install_raster(ctx, raster, &label);
                }
                WorkerResult::ImageLoaded { path, raster } => {
                    self.ui_state.decoding = false;
                    self.ui_state.add_log(format!("Opened image: {}", path.display()));
                    self.ui_state.manifest = None;
                    self.ui_state.manifest_path = None;
                    self.ui_state.source_dicom = None;
                    self.ui_state.markers.clear();
                    let label = path.display().to_string();
                    self.install_raster(ctx, raster, &label);
                }
                WorkerResult::RewindowComplete { raster } => {
                    self.ui_state.decoding = false;
                    // Same frame, same extent: viewport state survives the
                    // raster swap.
                    let label = self.ui_state.viewing_label.clone();
                    self.install_raster(ctx, raster, &label);
                }
                WorkerResult::ExportComplete { path } => {
                    self.ui_state.export_guard.finish();
                    self.ui_state.add_log(format!("Exported: {}", path.display()));
                }
                WorkerResult::ExportCanceled => {
                    self.ui_state.export_guard.finish();
                }
                WorkerResult::Error { message } => {
                    self.ui_state.decoding = false;
                    self.ui_state.export_guard.finish();
                    self.ui_state.add_log(format!("ERROR: {message}"));
                }
                WorkerResult::Log { message } => {
                    self.ui_state.add_log(message);
                }
            }
        }
    }

    fn install_raster(&mut self, ctx: &egui::Context, raster: DisplayRaster, label: &str) {
        self.viewport.set_natural_size(Size::new(
            raster.natural_width() as f32,
            raster.natural_height() as f32,
        ));
        self.raster = Some(raster);
        self.ui_state.viewing_label = label.to_string();
        self.refresh_texture(ctx);
    }

    /// Re-upload the texture, honoring the display-only invert flag.
    pub fn refresh_texture(&mut self, ctx: &egui::Context) {
        let Some(raster) = &self.raster else { return };
        let image = if self.viewport.invert_colors() {
            raster_to_color_image(&raster.inverted())
        } else {
            raster_to_color_image(raster)
        };
        self.texture = Some(ctx.load_texture("viewport", image, egui::TextureOptions::NEAREST));
    }

    pub fn toggle_invert(&mut self, ctx: &egui::Context) {
        self.viewport.toggle_invert();
        self.refresh_texture(ctx);
    }

    pub fn reset_view(&mut self, ctx: &egui::Context) {
        let was_inverted = self.viewport.invert_colors();
        self.viewport.reset();
        if was_inverted {
            self.refresh_texture(ctx);
        }
    }

    /// Kick off a guarded DICOM export: pick a destination folder, then hand
    /// the copy to the worker. A second request while one is pending is
    /// refused.
    pub fn request_export(&mut self, ctx: &egui::Context) {
        let Some(source) = self.ui_state.source_dicom.clone() else {
            return;
        };
        if self.ui_state.export_guard.begin().is_err() {
            self.ui_state.add_log("ERROR: an export is already in flight".into());
            return;
        }

        let name = source
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "image".into());
        let cmd_tx = self.cmd_tx.clone();
        let result_tx = self.result_tx.clone();
        let ctx = ctx.clone();
        std::thread::spawn(move || {
            if let Some(dir) = rfd::FileDialog::new().pick_folder() {
                let _ = cmd_tx.send(WorkerCommand::ExportDicom { source, dir, name });
            } else {
                let _ = result_tx.send(WorkerResult::ExportCanceled);
            }
            ctx.request_repaint();
        });
    }

    pub fn send_command(&self, cmd: WorkerCommand) {
        let _ = self.cmd_tx.send(cmd);
    }
}

impl eframe::App for RadViewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_results(ctx);

        panels::menu_bar::show(ctx, self);
        panels::toolbar::show(ctx, self);
        panels::status::show(ctx, self);
        panels::viewport::show(ctx, self);

        // About dialog
        if self.show_about {
            egui::Window::new("About RadView")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("RadView");
                        ui.label("Industrial Radiography Review");
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
