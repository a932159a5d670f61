//! Port definitions at the toolkit boundary.

mod window;

pub use window::WindowPort;
