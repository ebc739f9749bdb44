use std::path::Path;
use std::sync::mpsc;

use radview_core::frame::{RawFrame, VoiWindow};
use radview_core::io::export::{export_to_dir, ExportSources};
use radview_core::io::manifest::FrameManifest;
use radview_core::io::raster_io::load_raster;
use radview_core::windowing::{decode, decode_with};

use crate::messages::{WorkerCommand, WorkerResult};

/// Cached state living on the worker thread: the decoded frame is kept so
/// re-windowing does not re-read the dump.
#[derive(Default)]
struct WorkerCache {
    frame: Option<RawFrame>,
}

/// Spawn the worker thread. Returns the command sender.
pub fn spawn_worker(
    result_tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) -> mpsc::Sender<WorkerCommand> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<WorkerCommand>();

    std::thread::Builder::new()
        .name("radview-worker".into())
        .spawn(move || {
            worker_loop(cmd_rx, result_tx, ctx);
        })
        .expect("Failed to spawn worker thread");

    cmd_tx
}

fn send(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, result: WorkerResult) {
    let _ = tx.send(result);
    ctx.request_repaint();
}

fn send_log(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, msg: impl Into<String>) {
    send(tx, ctx, WorkerResult::Log { message: msg.into() });
}

fn send_error(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, msg: impl Into<String>) {
    send(tx, ctx, WorkerResult::Error { message: msg.into() });
}

fn worker_loop(
    cmd_rx: mpsc::Receiver<WorkerCommand>,
    tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) {
    let mut cache = WorkerCache::default();

    while let Ok(cmd) = cmd_rx.recv() {
        match cmd {
            WorkerCommand::LoadManifest { path } => {
                handle_load_manifest(&path, &mut cache, &tx, &ctx);
            }
            WorkerCommand::LoadImage { path } => {
                handle_load_image(&path, &mut cache, &tx, &ctx);
            }
            WorkerCommand::Rewindow { window } => {
                handle_rewindow(window, &cache, &tx, &ctx);
            }
            WorkerCommand::ExportDicom { source, dir, name } => {
                handle_export(&source, &dir, &name, &tx, &ctx);
            }
        }
    }
}

fn handle_load_manifest(
    path: &Path,
    cache: &mut WorkerCache,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    let manifest = match FrameManifest::load(path) {
        Ok(m) => m,
        Err(e) => {
            send_error(tx, ctx, format!("Failed to load manifest: {e}"));
            return;
        }
    };

    let frame = match manifest.load_frame(path) {
        Ok(f) => f,
        Err(e) => {
            send_error(tx, ctx, format!("Failed to load frame: {e}"));
            return;
        }
    };

    let raster = match decode(&frame) {
        Ok(r) => r,
        Err(e) => {
            send_error(tx, ctx, format!("Failed to window frame: {e}"));
            return;
        }
    };

    tracing::debug!(path = %path.display(), "frame decoded");
    cache.frame = Some(frame);
    send(
        tx,
        ctx,
        WorkerResult::ManifestLoaded {
            path: path.to_path_buf(),
            manifest,
            raster,
        },
    );
}

fn handle_load_image(
    path: &Path,
    cache: &mut WorkerCache,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    match load_raster(path) {
        Ok(raster) => {
            // No raw frame behind a plain image, so re-windowing is off.
            cache.frame = None;
            send(
                tx,
                ctx,
                WorkerResult::ImageLoaded {
                    path: path.to_path_buf(),
                    raster,
                },
            );
        }
        Err(e) => send_error(tx, ctx, format!("Failed to load image: {e}")),
    }
}

fn handle_rewindow(
    window: VoiWindow,
    cache: &WorkerCache,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    let frame = match &cache.frame {
        Some(f) => f,
        None => {
            send_error(tx, ctx, "No raw frame loaded. Open a manifest first.");
            return;
        }
    };

    match decode_with(frame, window) {
        Ok(raster) => {
            send_log(
                tx,
                ctx,
                format!("Re-windowed (center {}, width {})", window.center, window.width),
            );
            send(tx, ctx, WorkerResult::RewindowComplete { raster });
        }
        Err(e) => send_error(tx, ctx, format!("Re-window failed: {e}")),
    }
}

fn handle_export(
    source: &Path,
    dir: &Path,
    name: &str,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    match export_to_dir(ExportSources::from_file(source.to_path_buf()), name, dir) {
        Ok(path) => send(tx, ctx, WorkerResult::ExportComplete { path }),
        Err(e) => send_error(tx, ctx, format!("DICOM export failed: {e}")),
    }
}
