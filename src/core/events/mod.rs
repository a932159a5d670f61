//! The frame's event stream: named string events, produced by one-shot
//! timers and external input adapters, consumed in strict FIFO order by a
//! single blocking pull operation.

pub mod errors;
mod queue;

pub use errors::EventPullError;
pub use queue::{EventQueue, EventSender, EventSource};
