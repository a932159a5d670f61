/// Pixel dimensions of the window or of a panel's preferred area.
///
/// Dimensions are unsigned; a zero-sized frame is legal and simply has no
/// drawable area until resized.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub const fn area(&self) -> u64 {
        (self.width as u64) * (self.height as u64)
    }
}
