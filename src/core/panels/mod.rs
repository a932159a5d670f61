mod panel;

pub use panel::{DrawablePanel, Panel};
