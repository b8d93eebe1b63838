//! Calculator core: the accumulator state machine, memory register and
//! session history.
//!
//! Nothing in here knows about the terminal. The front end feeds button and
//! key presses into a [`session::Calculator`] and renders what it reports.

pub mod accumulator;
pub mod error;
pub mod format;
pub mod history;
pub mod memory;
pub mod ops;
pub mod session;
