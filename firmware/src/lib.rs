//! Hardware side of the demo panel.
//!
//! Shared by the two demo binaries: display rendering, button sampling,
//! entropy and the ambient watchdog task. The per-iteration logic lives
//! in `hotaru-ui`.

#![no_std]

pub mod buttons;
pub mod display;
pub mod entropy;
pub mod watchdog;
