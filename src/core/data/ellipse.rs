/// A single ellipse draw command: center in panel pixel coordinates plus a
/// radius. Centers may lie outside the panel; the surface clips on render.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Ellipse {
    pub x: i32,
    pub y: i32,
    pub radius: u32,
}

impl Ellipse {
    #[must_use]
    pub const fn new(x: i32, y: i32, radius: u32) -> Self {
        Self { x, y, radius }
    }
}
