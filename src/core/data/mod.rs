pub mod color;
pub mod ellipse;
pub mod size;
