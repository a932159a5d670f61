//! GUI backend: winit for window management and the event loop, pixels for
//! framebuffer rendering. The facade core stays toolkit-agnostic; this
//! module adapts it to winit through directives sent over the event loop
//! proxy.

mod app;
mod canvas_panel;
mod directives;
mod window_handle;

pub use app::run_gui;
pub use canvas_panel::{CanvasPanel, CanvasState};
pub use directives::GuiDirective;
pub use window_handle::ProxyWindow;
