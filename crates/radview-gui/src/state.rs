use std::path::PathBuf;

use radview_core::consts::{DEFAULT_WINDOW_CENTER, DEFAULT_WINDOW_WIDTH};
use radview_core::io::export::ExportGuard;
use radview_core::io::manifest::FrameManifest;
use radview_core::overlay::Marker;

/// Overall UI state.
pub struct UIState {
    pub manifest_path: Option<PathBuf>,
    pub manifest: Option<FrameManifest>,
    /// Source `.dcm` resolved against the manifest directory, for export.
    pub source_dicom: Option<PathBuf>,
    pub markers: Vec<Marker>,
    pub show_markers: bool,
    pub viewing_label: String,

    /// Editable VOI fields, seeded from the manifest on load.
    pub window_center: f32,
    pub window_width: f32,

    /// Export in-flight guard; part of the viewer contract.
    pub export_guard: ExportGuard,

    /// A decode or load is running on the worker.
    pub decoding: bool,

    /// Log messages.
    pub log_messages: Vec<String>,
}

impl Default for UIState {
    fn default() -> Self {
        Self {
            manifest_path: None,
            manifest: None,
            source_dicom: None,
            markers: Vec::new(),
            show_markers: true,
            viewing_label: String::new(),
            window_center: DEFAULT_WINDOW_CENTER,
            window_width: DEFAULT_WINDOW_WIDTH,
            export_guard: ExportGuard::default(),
            decoding: false,
            log_messages: Vec::new(),
        }
    }
}

impl UIState {
    pub fn add_log(&mut self, msg: String) {
        self.log_messages.push(msg);
    }

    pub fn can_export(&self) -> bool {
        self.source_dicom.is_some() && !self.export_guard.is_downloading()
    }
}
