use crate::viewport::Vec2;

/// A defect-detection marker in source-image pixel space.
///
/// Positions use the raster's own pixel grid. The viewer projects them
/// through its current transform (`ViewportState::project`); callers never
/// pre-scale coordinates.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Marker {
    pub x: f32,
    pub y: f32,
    pub label: String,
    pub confidence: Option<f32>,
}

impl Marker {
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}
