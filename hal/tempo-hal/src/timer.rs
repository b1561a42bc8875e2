//! 32-bit timer register primitives
//!
//! Provides the register-level operations the driver needs from a bank of
//! 32-bit timer peripherals. Implementations handle the actual register
//! layout for the specific chip.

use bitflags::bitflags;

/// Counting discipline programmed into a timer peripheral.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CountMode {
    /// Count down from the load value to zero, then stop.
    OneShotDown,
    /// Count down from the load value to zero, then reload and repeat.
    PeriodicDown,
    /// Count up from zero to the load value, then wrap and repeat.
    PeriodicUp,
}

bitflags! {
    /// Interrupt causes a timer peripheral can raise.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct IrqFlags: u32 {
        /// Counter reached its terminal value: zero counting down, the
        /// load value counting up.
        const TIMEOUT = 1 << 0;
        /// Counter equalled the match register.
        const MATCH = 1 << 1;
    }
}

/// Register access for a bank of 32-bit timer peripherals.
///
/// Every method takes the peripheral base address as its first argument and
/// implementations route it to the right register block; the driver passes
/// the address through opaquely and never interprets it.
///
/// Methods take `&mut self` because register access is effectful.
pub trait TimerRegs {
    /// Program the counting discipline.
    fn configure(&mut self, base: u32, mode: CountMode);

    /// Write the load register.
    ///
    /// The starting value in the countdown disciplines, the wrap point in
    /// [`CountMode::PeriodicUp`].
    fn set_load(&mut self, base: u32, ticks: u32);

    /// Read the load register back.
    fn load(&mut self, base: u32) -> u32;

    /// Write the match register.
    fn set_match(&mut self, base: u32, ticks: u32);

    /// Read the match register back.
    fn match_value(&mut self, base: u32) -> u32;

    /// Read the live counter value.
    fn value(&mut self, base: u32) -> u32;

    /// Enable delivery of the given interrupt causes.
    fn irq_enable(&mut self, base: u32, which: IrqFlags);

    /// Disable delivery of the given interrupt causes.
    fn irq_disable(&mut self, base: u32, which: IrqFlags);

    /// Read the currently asserted interrupt causes.
    fn irq_status(&mut self, base: u32) -> IrqFlags;

    /// Acknowledge the given interrupt causes.
    fn irq_clear(&mut self, base: u32, which: IrqFlags);

    /// Start the counter.
    fn count_enable(&mut self, base: u32);

    /// Freeze the counter.
    fn count_disable(&mut self, base: u32);
}
