use crate::core::data::color::Color;
use crate::core::data::ellipse::Ellipse;
use crate::core::data::size::Size;
use crate::core::panels::{DrawablePanel, Panel};
use std::sync::{Arc, Mutex};

/// What a [`TracePanel`] observed from the frame, in call order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelTrace {
    PreferredSize(Size),
    Background(Color),
    Draw(Ellipse),
    Repaint,
}

/// A drawable panel with no pixels behind it: records every call it
/// receives. The trace lives behind an `Arc` so it stays readable after the
/// panel moves into a frame.
#[derive(Default)]
pub struct TracePanel {
    trace: Arc<Mutex<Vec<PanelTrace>>>,
}

impl TracePanel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn trace_handle(&self) -> Arc<Mutex<Vec<PanelTrace>>> {
        Arc::clone(&self.trace)
    }

    fn record(&self, entry: PanelTrace) {
        self.trace.lock().expect("trace lock poisoned").push(entry);
    }
}

impl Panel for TracePanel {
    fn set_preferred_size(&mut self, size: Size) {
        self.record(PanelTrace::PreferredSize(size));
    }

    fn set_background(&mut self, color: Color) {
        self.record(PanelTrace::Background(color));
    }

    fn as_drawable(&mut self) -> Option<&mut dyn DrawablePanel> {
        Some(self)
    }
}

impl DrawablePanel for TracePanel {
    fn draw_ellipse(&mut self, ellipse: Ellipse) {
        self.record(PanelTrace::Draw(ellipse));
    }

    fn repaint(&mut self) {
        self.record(PanelTrace::Repaint);
    }
}

#[cfg(test)]
mod tests {
    use super::{PanelTrace, TracePanel};
    use crate::core::data::ellipse::Ellipse;
    use crate::core::panels::Panel;

    #[test]
    fn trace_survives_moving_the_panel() {
        let panel = TracePanel::new();
        let trace = panel.trace_handle();

        let mut boxed: Box<dyn Panel> = Box::new(panel);
        let surface = boxed.as_drawable().expect("trace panel is drawable");
        surface.draw_ellipse(Ellipse::new(1, 2, 3));
        surface.repaint();

        assert_eq!(
            *trace.lock().unwrap(),
            vec![PanelTrace::Draw(Ellipse::new(1, 2, 3)), PanelTrace::Repaint]
        );
    }
}
