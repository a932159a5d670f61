use crate::core::data::color::Color;
use crate::core::data::ellipse::Ellipse;
use crate::core::data::size::Size;

/// Contract every attached panel satisfies, drawable or not.
///
/// A panel is attached to exactly one frame, which sets its preferred size
/// and background at attach time. Whether the panel can be drawn on is a
/// typed capability: drawable panels return their surface from
/// [`Panel::as_drawable`], opaque panels keep the default `None`.
///
/// Panels are `Send`: toolkit backends run the window loop on the main
/// thread and hand the frame (panels included) to a control thread at
/// wiring time.
pub trait Panel: Send {
    fn set_preferred_size(&mut self, size: Size);

    fn set_background(&mut self, color: Color);

    /// Capability accessor used by draw routing. The default panel is
    /// opaque.
    fn as_drawable(&mut self) -> Option<&mut dyn DrawablePanel> {
        None
    }
}

/// Drawing surface of a panel that accepts shape commands.
pub trait DrawablePanel {
    /// Records or renders one ellipse on the surface.
    fn draw_ellipse(&mut self, ellipse: Ellipse);

    /// Requests that the surface be redrawn.
    fn repaint(&mut self);
}
