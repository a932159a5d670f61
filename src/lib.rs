mod core;
#[cfg(feature = "gui")]
mod input;
mod presenters;

pub use crate::core::data::color::{Color, DEFAULT_BACKGROUND};
pub use crate::core::data::ellipse::Ellipse;
pub use crate::core::data::size::Size;
pub use crate::core::events::{EventPullError, EventSender, EventSource};
pub use crate::core::frame::Frame;
pub use crate::core::panels::{DrawablePanel, Panel};
pub use crate::core::ports::WindowPort;
pub use crate::presenters::headless::{HeadlessWindow, PanelTrace, TracePanel, WindowDirective};

#[cfg(feature = "gui")]
pub use crate::input::gui::{CanvasPanel, CanvasState, GuiDirective, ProxyWindow, run_gui};
