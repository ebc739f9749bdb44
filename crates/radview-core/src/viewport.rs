use crate::consts::{MAX_ZOOM, MIN_ZOOM};

/// 2D offset or point in container pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Measured 2D extent.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub w: f32,
    pub h: f32,
}

impl Size {
    pub fn new(w: f32, h: f32) -> Self {
        Self { w, h }
    }

    pub fn is_empty(self) -> bool {
        self.w <= 0.0 || self.h <= 0.0
    }
}

/// Composite affine transform for rendering, anchored at the container's
/// visual center: translate(pan), center the raster, rotate, then scale.
/// Flips are carried in the scale signs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewTransform {
    pub pan: Vec2,
    pub rotation_degrees: i32,
    pub scale_x: f32,
    pub scale_y: f32,
}

/// Viewport state for one displayed raster.
///
/// Owned exclusively by a single viewer instance and mutated only through
/// the operation set below. Clamping is enforced behavior, not an error:
/// zoom stays in [MIN_ZOOM, MAX_ZOOM] and pan can never push the raster
/// fully outside the container.
#[derive(Clone, Debug)]
pub struct ViewportState {
    pan: Vec2,
    zoom: f32,
    rotation_degrees: i32,
    flip_horizontal: bool,
    flip_vertical: bool,
    invert_colors: bool,
    container: Size,
    natural: Size,
    default_rotation: i32,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self::new(0)
    }
}

impl ViewportState {
    pub fn new(default_rotation: i32) -> Self {
        Self {
            pan: Vec2::ZERO,
            zoom: 1.0,
            rotation_degrees: default_rotation,
            flip_horizontal: false,
            flip_vertical: false,
            invert_colors: false,
            container: Size::default(),
            natural: Size::default(),
            default_rotation,
        }
    }

    pub fn pan(&self) -> Vec2 {
        self.pan
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn rotation_degrees(&self) -> i32 {
        self.rotation_degrees
    }

    pub fn flip_horizontal(&self) -> bool {
        self.flip_horizontal
    }

    pub fn flip_vertical(&self) -> bool {
        self.flip_vertical
    }

    pub fn invert_colors(&self) -> bool {
        self.invert_colors
    }

    pub fn container(&self) -> Size {
        self.container
    }

    pub fn natural(&self) -> Size {
        self.natural
    }

    /// Rotation normalized to [0, 360), for display.
    pub fn normalized_rotation(&self) -> i32 {
        self.rotation_degrees.rem_euclid(360)
    }

    /// True when the current rotation swaps the raster's effective
    /// width and height.
    pub fn is_quarter_turned(&self) -> bool {
        self.normalized_rotation() % 180 == 90
    }

    fn effective_natural(&self) -> Size {
        if self.is_quarter_turned() {
            Size::new(self.natural.h, self.natural.w)
        } else {
            self.natural
        }
    }

    /// Scale that makes the raster exactly fill the container without
    /// overflow, accounting for quarter turns. Identity until both the
    /// container and natural extents are known.
    pub fn fit_scale(&self) -> f32 {
        if self.natural.is_empty() || self.container.is_empty() {
            return 1.0;
        }
        let eff = self.effective_natural();
        (self.container.w / eff.w).min(self.container.h / eff.h)
    }

    pub fn total_scale(&self) -> f32 {
        self.fit_scale() * self.zoom
    }

    /// On-screen extent of the raster under the current transform.
    pub fn displayed_size(&self) -> Size {
        let eff = self.effective_natural();
        let s = self.total_scale().abs();
        Size::new(eff.w * s, eff.h * s)
    }

    fn clamped(&self, pan: Vec2) -> Vec2 {
        let displayed = self.displayed_size();
        let max_x = ((displayed.w - self.container.w) / 2.0).max(0.0);
        let max_y = ((displayed.h - self.container.h) / 2.0).max(0.0);
        Vec2::new(pan.x.clamp(-max_x, max_x), pan.y.clamp(-max_y, max_y))
    }

    /// Record a container resize. Pan is re-clamped against the new extent.
    pub fn set_container_size(&mut self, size: Size) {
        self.container = size;
        self.pan = self.clamped(self.pan);
    }

    /// Install the natural extent of a raster. Replacing the raster
    /// restores mount-time defaults.
    pub fn set_natural_size(&mut self, size: Size) {
        if self.natural != size {
            self.natural = size;
            self.reset();
        }
    }

    /// Scale the raster to exactly fill the container.
    pub fn fit(&mut self) {
        self.zoom = 1.0;
        self.pan = Vec2::ZERO;
    }

    /// Render at native pixel size. No-op until the fit scale is known.
    pub fn one_to_one(&mut self) {
        let fs = self.fit_scale();
        if fs <= 0.0 || !fs.is_finite() {
            return;
        }
        self.zoom = (1.0 / fs).clamp(MIN_ZOOM, MAX_ZOOM);
        self.pan = Vec2::ZERO;
    }

    pub fn zoom_by(&mut self, factor: f32) {
        self.zoom = (self.zoom * factor).clamp(MIN_ZOOM, MAX_ZOOM);
        self.pan = self.clamped(self.pan);
    }

    /// Anchor-preserving zoom: the point at `cursor_from_center` (measured
    /// from the container center) stays visually fixed while the scale
    /// changes.
    pub fn zoom_at(&mut self, factor: f32, cursor_from_center: Vec2) {
        let prev = self.zoom;
        let next = (prev * factor).clamp(MIN_ZOOM, MAX_ZOOM);
        let change = next / prev;
        let dx = cursor_from_center.x - self.pan.x;
        let dy = cursor_from_center.y - self.pan.y;
        self.zoom = next;
        self.pan = self.clamped(Vec2::new(
            self.pan.x + (1.0 - change) * dx,
            self.pan.y + (1.0 - change) * dy,
        ));
    }

    pub fn pan_by(&mut self, dx: f32, dy: f32) {
        self.pan = self.clamped(Vec2::new(self.pan.x + dx, self.pan.y + dy));
    }

    /// Quarter turn clockwise. Pan resets: the effective extent swap
    /// invalidates the previous clamp.
    pub fn rotate_cw(&mut self) {
        self.rotation_degrees += 90;
        self.pan = Vec2::ZERO;
    }

    /// Quarter turn counter-clockwise. Pan resets as for `rotate_cw`.
    pub fn rotate_ccw(&mut self) {
        self.rotation_degrees -= 90;
        self.pan = Vec2::ZERO;
    }

    pub fn toggle_flip_horizontal(&mut self) {
        self.flip_horizontal = !self.flip_horizontal;
    }

    pub fn toggle_flip_vertical(&mut self) {
        self.flip_vertical = !self.flip_vertical;
    }

    /// Display-only inversion; pixel data is never touched.
    pub fn toggle_invert(&mut self) {
        self.invert_colors = !self.invert_colors;
    }

    /// Restore mount-time defaults, including the caller-supplied default
    /// rotation. Container and natural extents are kept.
    pub fn reset(&mut self) {
        self.zoom = 1.0;
        self.pan = Vec2::ZERO;
        self.rotation_degrees = self.default_rotation;
        self.flip_horizontal = false;
        self.flip_vertical = false;
        self.invert_colors = false;
    }

    /// Composite transform, recomputed from state on each render.
    pub fn transform(&self) -> ViewTransform {
        let s = self.total_scale();
        ViewTransform {
            pan: self.pan,
            rotation_degrees: self.rotation_degrees,
            scale_x: s * if self.flip_horizontal { -1.0 } else { 1.0 },
            scale_y: s * if self.flip_vertical { -1.0 } else { 1.0 },
        }
    }

    /// Project a point in source-image pixel space to container coordinates
    /// (origin at the container's top-left). Overlay markers supply source
    /// coordinates and are placed with this mapping, so they track the
    /// raster under any pan/zoom/rotation/flip combination.
    pub fn project(&self, source: Vec2) -> Vec2 {
        let t = self.transform();
        let local_x = (source.x - self.natural.w / 2.0) * t.scale_x;
        let local_y = (source.y - self.natural.h / 2.0) * t.scale_y;
        let rad = (t.rotation_degrees as f32).to_radians();
        let (sin, cos) = rad.sin_cos();
        Vec2::new(
            self.container.w / 2.0 + t.pan.x + local_x * cos - local_y * sin,
            self.container.h / 2.0 + t.pan.y + local_x * sin + local_y * cos,
        )
    }
}
