//! Pure display model for the demo panel firmware.
//!
//! Everything here is a deterministic function of the iteration counter
//! and the inputs sampled by the firmware, so the whole crate runs and
//! tests on the host. The firmware crate owns the hardware and renders
//! the frames built here.

#![no_std]

pub mod colour;
pub mod driver;
pub mod format;
pub mod frame;
