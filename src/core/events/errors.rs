use std::{error::Error, fmt};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum EventPullError {
    /// The producer side of the queue is gone: the owning frame was torn
    /// down, so no further event can ever arrive.
    Disconnected,
}

impl fmt::Display for EventPullError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Disconnected => {
                write!(f, "event queue disconnected: the owning frame was dropped")
            }
        }
    }
}

impl Error for EventPullError {}
