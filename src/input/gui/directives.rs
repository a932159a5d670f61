use crate::core::data::size::Size;

/// User events carried into the winit event loop.
///
/// The frame's control thread cannot touch the window directly; its
/// [`WindowPort`](crate::core::ports::WindowPort) adapter and the canvas
/// panel wake the loop with these instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuiDirective {
    /// Resize the window bounds.
    Resize(Size),
    /// A panel was attached under this name. The GUI window is a single
    /// full-bleed area, so this only shows up in the logs.
    Attach(String),
    /// Make the window visible.
    Show,
    /// A drawable surface changed; repaint on the next pass.
    ///
    /// Note: receiving this does NOT redraw by itself. The handler calls
    /// `window.request_redraw()` and the rasterization happens in the
    /// `RedrawRequested` branch.
    Redraw,
}
