use crate::core::events::EventSender;
use std::thread;
use std::time::Duration;

/// One-shot deferred enqueue: after at least `delay`, pushes `event_name`
/// onto the queue behind `sender`, exactly once, from a dedicated timer
/// thread. Returns immediately; the firing cannot be cancelled.
///
/// The timer captures nothing but the event name and the channel handle, so
/// a firing after the owning frame is gone degrades to a swallowed push.
pub fn fire_after(delay: Duration, event_name: String, sender: EventSender) {
    thread::spawn(move || {
        thread::sleep(delay);
        sender.push(event_name);
    });
}

#[cfg(test)]
mod tests {
    use super::fire_after;
    use crate::core::events::EventQueue;
    use std::time::{Duration, Instant};

    #[test]
    fn fires_exactly_once_and_not_before_the_deadline() {
        let queue = EventQueue::new();
        let source = queue.source();

        let start = Instant::now();
        fire_after(Duration::from_millis(100), "tick".into(), queue.sender());

        assert_eq!(source.next(), "tick");
        assert!(start.elapsed() >= Duration::from_millis(100));

        // Nothing else may arrive from a one-shot timer; a fence pushed now
        // must be the very next event.
        queue.sender().push("fence");
        assert_eq!(source.next(), "fence");
    }

    #[test]
    fn returns_without_waiting_for_the_deadline() {
        let queue = EventQueue::new();

        let start = Instant::now();
        fire_after(Duration::from_millis(500), "late".into(), queue.sender());

        assert!(start.elapsed() < Duration::from_millis(100));
    }

    #[test]
    fn zero_delay_fires_promptly() {
        let queue = EventQueue::new();
        let source = queue.source();

        fire_after(Duration::ZERO, "now".into(), queue.sender());

        assert_eq!(source.next(), "now");
    }

    #[test]
    fn firing_after_frame_teardown_is_swallowed() {
        let queue = EventQueue::new();
        let sender = queue.sender();
        drop(queue);

        // Must neither panic nor deliver anywhere.
        fire_after(Duration::from_millis(10), "orphan".into(), sender);
        std::thread::sleep(Duration::from_millis(50));
    }
}
