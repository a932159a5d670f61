use crate::core::events::errors::EventPullError;
use crossbeam_channel::{Receiver, Sender, unbounded};

/// The frame's pending-event queue: unbounded, multi-producer, strict FIFO.
///
/// The queue itself stays inside the frame; producers get [`EventSender`]
/// clones and the consumer side is handed out as an [`EventSource`].
pub struct EventQueue {
    tx: Sender<String>,
    rx: Receiver<String>,
}

impl EventQueue {
    #[must_use]
    pub fn new() -> Self {
        let (tx, rx) = unbounded();
        Self { tx, rx }
    }

    #[must_use]
    pub fn sender(&self) -> EventSender {
        EventSender {
            tx: self.tx.clone(),
        }
    }

    #[must_use]
    pub fn source(&self) -> EventSource {
        EventSource {
            rx: self.rx.clone(),
        }
    }
}

impl Default for EventQueue {
    fn default() -> Self {
        Self::new()
    }
}

/// Producer half. Pushes never block; the queue is unbounded and never drops
/// an accepted event. A push after the owning frame is gone is swallowed.
#[derive(Clone)]
pub struct EventSender {
    tx: Sender<String>,
}

impl EventSender {
    pub fn push(&self, event_name: impl Into<String>) {
        let event_name = event_name.into();
        if self.tx.send(event_name).is_err() {
            log::debug!("event push after frame teardown, dropped");
        }
    }
}

/// Consumer half of the queue.
///
/// `next` is the facade's pull operation: it blocks the calling thread until
/// an event is available and returns the oldest one. When the producer side
/// is gone it returns the empty string. The empty string is a sentinel, not
/// an event name; callers that want a typed signal use `recv` instead.
#[derive(Clone)]
pub struct EventSource {
    rx: Receiver<String>,
}

impl EventSource {
    /// Blocks until an event is available and removes it from the queue.
    ///
    /// Returns `""` once the owning frame has been dropped and the queue has
    /// drained.
    #[must_use]
    pub fn next(&self) -> String {
        self.rx.recv().unwrap_or_default()
    }

    /// Like [`EventSource::next`], but reports teardown explicitly instead
    /// of through the empty-string sentinel.
    pub fn recv(&self) -> Result<String, EventPullError> {
        self.rx.recv().map_err(|_| EventPullError::Disconnected)
    }
}

#[cfg(test)]
mod tests {
    use super::EventQueue;
    use crate::core::events::errors::EventPullError;
    use std::thread;
    use std::time::{Duration, Instant};

    #[test]
    fn pull_is_fifo_over_enqueue_order() {
        let queue = EventQueue::new();
        let sender = queue.sender();
        let source = queue.source();

        sender.push("e1");
        sender.push("e2");
        sender.push("e3");

        assert_eq!(source.next(), "e1");
        assert_eq!(source.next(), "e2");
        assert_eq!(source.next(), "e3");
    }

    #[test]
    fn push_never_blocks() {
        let queue = EventQueue::new();
        let sender = queue.sender();

        let start = Instant::now();
        for i in 0..10_000 {
            sender.push(format!("event-{i}"));
        }

        // No consumer is draining; an unbounded queue must still accept all
        // pushes without stalling.
        assert!(start.elapsed() < Duration::from_secs(1));
    }

    #[test]
    fn concurrent_producers_lose_nothing() {
        let queue = EventQueue::new();
        let source = queue.source();

        let handles: Vec<_> = (0..4)
            .map(|producer| {
                let sender = queue.sender();
                thread::spawn(move || {
                    for i in 0..100 {
                        sender.push(format!("p{producer}-{i}"));
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().expect("producer thread panicked");
        }

        let mut received: Vec<String> = (0..400).map(|_| source.next()).collect();
        received.sort();
        received.dedup();
        assert_eq!(received.len(), 400);
    }

    #[test]
    fn per_producer_order_is_preserved() {
        let queue = EventQueue::new();
        let source = queue.source();
        let sender = queue.sender();

        let handle = thread::spawn(move || {
            for i in 0..50 {
                sender.push(format!("{i}"));
            }
        });
        handle.join().expect("producer thread panicked");

        let received: Vec<String> = (0..50).map(|_| source.next()).collect();
        let expected: Vec<String> = (0..50).map(|i| format!("{i}")).collect();
        assert_eq!(received, expected);
    }

    #[test]
    fn next_returns_empty_sentinel_after_teardown() {
        let queue = EventQueue::new();
        let sender = queue.sender();
        let source = queue.source();

        sender.push("last");
        drop(sender);
        drop(queue);

        // Queued events drain first, then the sentinel.
        assert_eq!(source.next(), "last");
        assert_eq!(source.next(), "");
    }

    #[test]
    fn recv_reports_teardown_as_disconnected() {
        let queue = EventQueue::new();
        let source = queue.source();

        drop(queue);

        assert_eq!(source.recv(), Err(EventPullError::Disconnected));
    }

    #[test]
    fn push_after_teardown_is_swallowed() {
        let queue = EventQueue::new();
        let sender = queue.sender();

        drop(queue);

        // Must not panic or block.
        sender.push("late");
    }

    #[test]
    fn next_blocks_until_an_event_arrives() {
        let queue = EventQueue::new();
        let sender = queue.sender();
        let source = queue.source();

        let puller = thread::spawn(move || source.next());

        thread::sleep(Duration::from_millis(50));
        sender.push("wake");

        assert_eq!(puller.join().expect("puller panicked"), "wake");
    }
}
