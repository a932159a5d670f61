use miniframe::{Frame, HeadlessWindow, PanelTrace, TracePanel};

/// Headless demo: configures a frame over the recording window, schedules
/// ticks, pulls them back and draws one ellipse per tick, then prints what
/// the panel observed.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let panel = TracePanel::new();
    let trace = panel.trace_handle();

    let mut frame = Frame::new(HeadlessWindow::new());
    frame
        .set_size(400, 300)
        .add_panel(Box::new(panel), "main")
        .show();

    let events = frame.events();
    for tick in 0..3u64 {
        frame.schedule(20 + tick * 20, format!("tick-{tick}"));
    }

    for step in 0..3i32 {
        let event = events.next();
        frame.draw_ellipse("main", 50 + step * 30, 50, 10);
        println!("event {event}");
    }

    for entry in trace.lock().expect("trace lock poisoned").iter() {
        if let PanelTrace::Draw(ellipse) = entry {
            println!("drew ellipse at ({}, {}) radius {}", ellipse.x, ellipse.y, ellipse.radius);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_main_returns_ok() {
        let result = main();

        assert!(result.is_ok());
    }
}
