//! Toolkit-free adapters: a directive-recording window and a call-recording
//! drawable panel, for the headless demo and for tests.

mod panel;
mod window;

pub use panel::{PanelTrace, TracePanel};
pub use window::{HeadlessWindow, WindowDirective};
