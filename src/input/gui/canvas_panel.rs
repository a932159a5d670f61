use crate::core::data::color::Color;
use crate::core::data::ellipse::Ellipse;
use crate::core::data::size::Size;
use crate::core::panels::{DrawablePanel, Panel};
use crate::input::gui::directives::GuiDirective;
use std::sync::{Arc, Mutex};
use winit::event_loop::EventLoopProxy;

/// Shape state shared between the control thread (which draws through the
/// facade) and the render loop (which rasterizes it).
pub struct CanvasState {
    pub background: Color,
    pub foreground: Color,
    /// Most recent ellipse; each draw replaces the previous one.
    pub ellipse: Option<Ellipse>,
}

impl Default for CanvasState {
    fn default() -> Self {
        Self {
            background: Color::BLACK,
            foreground: Color::WHITE,
            ellipse: None,
        }
    }
}

/// The drawable panel of the winit backend. Draw commands land in the
/// shared [`CanvasState`]; `repaint` wakes the event loop through the
/// proxy.
pub struct CanvasPanel {
    state: Arc<Mutex<CanvasState>>,
    proxy: EventLoopProxy<GuiDirective>,
}

impl CanvasPanel {
    #[must_use]
    pub fn new(state: Arc<Mutex<CanvasState>>, proxy: EventLoopProxy<GuiDirective>) -> Self {
        Self { state, proxy }
    }
}

impl Panel for CanvasPanel {
    fn set_preferred_size(&mut self, size: Size) {
        // The canvas fills the window; the inherited size is informational.
        log::trace!("canvas preferred size {}x{}", size.width, size.height);
    }

    fn set_background(&mut self, color: Color) {
        self.state.lock().expect("canvas lock poisoned").background = color;
    }

    fn as_drawable(&mut self) -> Option<&mut dyn DrawablePanel> {
        Some(self)
    }
}

impl DrawablePanel for CanvasPanel {
    fn draw_ellipse(&mut self, ellipse: Ellipse) {
        self.state.lock().expect("canvas lock poisoned").ellipse = Some(ellipse);
    }

    fn repaint(&mut self) {
        if self.proxy.send_event(GuiDirective::Redraw).is_err() {
            log::debug!("repaint after event loop exit, dropped");
        }
    }
}
