use crate::core::data::size::Size;
use crate::core::ports::WindowPort;
use crate::input::gui::directives::GuiDirective;
use winit::event_loop::EventLoopProxy;

/// [`WindowPort`] adapter for the winit backend: forwards every directive
/// to the event loop through its proxy. Directives sent after the loop has
/// exited are dropped, matching the host-process teardown boundary.
pub struct ProxyWindow {
    proxy: EventLoopProxy<GuiDirective>,
}

impl ProxyWindow {
    #[must_use]
    pub fn new(proxy: EventLoopProxy<GuiDirective>) -> Self {
        Self { proxy }
    }

    fn send(&self, directive: GuiDirective) {
        if self.proxy.send_event(directive).is_err() {
            log::debug!("window directive after event loop exit, dropped");
        }
    }
}

impl WindowPort for ProxyWindow {
    fn resize(&mut self, size: Size) {
        self.send(GuiDirective::Resize(size));
    }

    fn attach(&mut self, name: &str) {
        self.send(GuiDirective::Attach(name.to_string()));
    }

    fn show(&mut self) {
        self.send(GuiDirective::Show);
    }
}
