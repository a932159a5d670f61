use crate::core::data::color::DEFAULT_BACKGROUND;
use crate::core::data::ellipse::Ellipse;
use crate::core::data::size::Size;
use crate::core::events::{EventQueue, EventSender, EventSource};
use crate::core::panels::Panel;
use crate::core::ports::WindowPort;
use crate::core::timer;
use std::collections::HashMap;
use std::time::Duration;

/// The single-window facade: panel registry, event queue, timer scheduling
/// and the toolkit directives, behind a chainable API.
///
/// Configuration calls return `&mut Self` and never block; the only blocking
/// operation is the pull on the [`EventSource`] returned by
/// [`Frame::events`]. Configuration is expected to happen from one thread
/// (or under external synchronization) before the event-pull loop starts.
pub struct Frame<W: WindowPort> {
    window: W,
    size: Size,
    visible: bool,
    panels: HashMap<String, Box<dyn Panel>>,
    // Panels whose registry entry was overwritten. They stay alive because
    // they remain children of the window even though routing no longer
    // reaches them.
    shadowed: Vec<Box<dyn Panel>>,
    queue: EventQueue,
}

impl<W: WindowPort> Frame<W> {
    #[must_use]
    pub fn new(window: W) -> Self {
        Self {
            window,
            size: Size::default(),
            visible: false,
            panels: HashMap::new(),
            shadowed: Vec::new(),
            queue: EventQueue::new(),
        }
    }

    /// Sets the window's pixel dimensions. Resizes the window bounds
    /// immediately; panels attached earlier keep their preferred size.
    pub fn set_size(&mut self, width: u32, height: u32) -> &mut Self {
        self.size = Size::new(width, height);
        self.window.resize(self.size);
        self
    }

    /// Registers `panel` under `name` and attaches it as a visible window
    /// child, inheriting the frame's current size and the default
    /// background.
    ///
    /// Re-using a name overwrites the registry entry (last write wins); the
    /// displaced panel stays attached to the window.
    pub fn add_panel(&mut self, mut panel: Box<dyn Panel>, name: impl Into<String>) -> &mut Self {
        let name = name.into();
        panel.set_preferred_size(self.size);
        panel.set_background(DEFAULT_BACKGROUND);
        self.window.attach(&name);
        if let Some(displaced) = self.panels.insert(name, panel) {
            self.shadowed.push(displaced);
        }
        self
    }

    /// Forwards one ellipse draw and one repaint request to the panel
    /// registered under `panel_name`.
    ///
    /// Unknown names and panels without drawing capability are silent
    /// no-ops: misrouted draws never fail.
    pub fn draw_ellipse(&mut self, panel_name: &str, x: i32, y: i32, radius: u32) -> &mut Self {
        let Some(panel) = self.panels.get_mut(panel_name) else {
            log::debug!("draw_ellipse: no panel registered under {panel_name:?}");
            return self;
        };
        let Some(surface) = panel.as_drawable() else {
            log::debug!("draw_ellipse: panel {panel_name:?} has no drawing capability");
            return self;
        };
        surface.draw_ellipse(Ellipse::new(x, y, radius));
        surface.repaint();
        self
    }

    /// Arranges for `event_name` to be enqueued exactly once, after at least
    /// `millis` milliseconds, from a timer thread. Fire-and-forget: returns
    /// immediately, cannot be cancelled, and independent schedules interleave
    /// in deadline order (ties unspecified).
    pub fn schedule(&mut self, millis: u64, event_name: impl Into<String>) -> &mut Self {
        timer::fire_after(
            Duration::from_millis(millis),
            event_name.into(),
            self.queue.sender(),
        );
        self
    }

    /// Makes the window visible. Idempotent.
    pub fn show(&mut self) -> &mut Self {
        self.visible = true;
        self.window.show();
        self
    }

    /// The blocking pull side of the event queue. Every clone drains the
    /// same queue; the facade assumes a single logical consumer.
    #[must_use]
    pub fn events(&self) -> EventSource {
        self.queue.source()
    }

    /// Producer handle for input adapters outside the facade (key presses,
    /// mouse clicks) that push named events into the same queue as the
    /// timers. Pushes never block.
    #[must_use]
    pub fn event_sender(&self) -> EventSender {
        self.queue.sender()
    }

    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }
}
