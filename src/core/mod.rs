//! Toolkit-agnostic facade core: the frame, its panel registry, the event
//! queue and one-shot timer scheduling. Everything toolkit-specific sits
//! behind the ports in [`ports`].

pub mod data;
pub mod events;
pub mod frame;
pub mod panels;
pub mod ports;
pub mod timer;
