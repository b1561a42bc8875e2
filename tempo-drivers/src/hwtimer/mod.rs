//! Multiplexed 32-bit hardware timer driver
//!
//! A fixed pool of physical timer peripherals behind a handle-based API.
//! Each allocated slot runs in one of three modes:
//!
//! - [`Mode::OneShot`] - count down once, fire, disarm
//! - [`Mode::Periodic`] - count down, fire, auto-reload
//! - [`Mode::Monotone`] - free-running upward count with a match point,
//!   extended past 32 bits by rollover accounting
//!
//! Register access and interrupt masking are injected capabilities
//! ([`TimerRegs`](tempo_hal::TimerRegs), [`IrqControl`](tempo_hal::IrqControl)),
//! so the whole driver runs unmodified against mock hardware on the host.
//! See [`TimerPool`] for the concurrency contract between foreground
//! callers and the interrupt-context dispatcher.

mod config;
mod error;
mod mode;
mod ops;
mod pool;
mod slot;
mod ticks;

pub use config::{AttachRejected, Binding, OnFire, TimerConfig, TimerDelegate};
pub use error::TimerError;
pub use mode::Mode;
pub use ops::TimerOps;
pub use pool::{TimerHandle, TimerPool};
