//! Driver implementations for the tempo timer stack
//!
//! This crate provides the hardware-independent driver logic, generic over
//! the capability traits defined in tempo-hal:
//!
//! - Multiplexed 32-bit hardware timer pool (one-shot, periodic, monotone)

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
#[macro_use]
extern crate std;

pub mod hwtimer;
