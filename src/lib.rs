#![cfg_attr(not(test), no_std)]

//! tiltlink — accelerometer driven direction link over USB CDC.
//!
//! The library holds everything that does not touch a register: the button
//! edge detector, the direction hysteresis, the poller state machine, the two
//! inter-task queues and the transmit/indicator workers. The firmware binary
//! (`src/main.rs`, `firmware` feature) wires these to embassy-stm32
//! peripherals.

#[macro_use]
mod log;

pub mod config;
pub mod context;
pub mod debounce;
pub mod direction;
pub mod error;
pub mod indicator;
pub mod packet;
pub mod poller;
pub mod queue;
pub mod sensor;
pub mod transmit;
