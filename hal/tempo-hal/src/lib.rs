//! Tempo Hardware Abstraction Layer
//!
//! This crate defines the capability traits the timer driver is generic
//! over. A platform crate implements them against real registers and the
//! real interrupt controller; the driver core never touches hardware
//! directly, which also lets it run unmodified against mock
//! implementations on the host.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application / interrupt vectors        │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  tempo-drivers (pool, dispatch)         │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  tempo-hal (this crate - traits)        │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  Platform implementation                │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`timer::TimerRegs`] - 32-bit timer register primitives
//! - [`irq::IrqControl`] - interrupt mask/unmask hooks, with
//!   [`irq::IrqGuard`] as the scoped critical section built on them

#![no_std]
#![deny(unsafe_code)]

pub mod irq;
pub mod timer;

// Re-export key items at crate root for convenience
pub use irq::{IrqControl, IrqGuard};
pub use timer::{CountMode, IrqFlags, TimerRegs};
