/// Minimum viewport zoom, relative to the fit scale.
pub const MIN_ZOOM: f32 = 0.1;

/// Maximum viewport zoom, relative to the fit scale.
pub const MAX_ZOOM: f32 = 20.0;

/// Zoom change per wheel notch (10% in or out).
pub const WHEEL_ZOOM_STEP: f32 = 0.10;

/// Zoom multiplier applied on double-click.
pub const DOUBLE_CLICK_ZOOM_FACTOR: f32 = 1.6;

/// Zoom multiplier for the toolbar +/- buttons.
pub const BUTTON_ZOOM_FACTOR: f32 = 1.2;

/// VOI window width at or below which decoding refuses to run.
/// The display mapping divides by `width - 1`, so widths <= 1 are rejected
/// rather than clamped.
pub const MIN_VALID_WINDOW_WIDTH: f32 = 1.0;

/// Fallback window center when the source carries no VOI attributes.
pub const DEFAULT_WINDOW_CENTER: f32 = 128.0;

/// Fallback window width when the source carries no VOI attributes.
pub const DEFAULT_WINDOW_WIDTH: f32 = 256.0;

/// Mount-time rotation for pipeline radiographs, which arrive turned a
/// quarter turn from the reading orientation.
pub const DEFAULT_ROTATION_DEGREES: i32 = -90;

/// Minimum pixel count (h*w) to use row-level Rayon parallelism when
/// windowing a frame.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 65_536;
