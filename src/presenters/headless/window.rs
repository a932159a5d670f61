use crate::core::data::size::Size;
use crate::core::ports::WindowPort;

/// Directive recorded by the headless window, in issue order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WindowDirective {
    Resize(Size),
    Attach(String),
    Show,
}

/// A [`WindowPort`] with no toolkit behind it: records every directive the
/// frame issues. Backs the headless demo and doubles as a test double.
#[derive(Default)]
pub struct HeadlessWindow {
    directives: Vec<WindowDirective>,
}

impl HeadlessWindow {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn directives(&self) -> &[WindowDirective] {
        &self.directives
    }
}

impl WindowPort for HeadlessWindow {
    fn resize(&mut self, size: Size) {
        self.directives.push(WindowDirective::Resize(size));
    }

    fn attach(&mut self, name: &str) {
        self.directives.push(WindowDirective::Attach(name.to_string()));
    }

    fn show(&mut self) {
        self.directives.push(WindowDirective::Show);
    }
}

#[cfg(test)]
mod tests {
    use super::{HeadlessWindow, WindowDirective};
    use crate::core::data::size::Size;
    use crate::core::ports::WindowPort;

    #[test]
    fn records_directives_in_issue_order() {
        let mut window = HeadlessWindow::new();

        window.resize(Size::new(400, 300));
        window.attach("main");
        window.show();

        assert_eq!(
            window.directives(),
            &[
                WindowDirective::Resize(Size::new(400, 300)),
                WindowDirective::Attach("main".to_string()),
                WindowDirective::Show,
            ]
        );
    }
}
