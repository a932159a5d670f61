use crate::core::data::size::Size;

/// Directives the frame produces toward the windowing toolkit.
///
/// One implementor per window; the frame owns it for the window's lifetime.
/// The toolkit side decides what the directives mean on screen — the frame
/// only guarantees the order it issues them in.
pub trait WindowPort {
    /// Resizes the window bounds immediately.
    fn resize(&mut self, size: Size);

    /// Adds a visible child region under `name`. Called once per attach,
    /// including re-attaches under an existing name; earlier children stay.
    fn attach(&mut self, name: &str);

    /// Makes the window visible. Idempotent.
    fn show(&mut self);
}
