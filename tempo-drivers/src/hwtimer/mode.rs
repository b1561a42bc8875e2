//! Operating modes and the per-slot state machine

use tempo_hal::{CountMode, IrqFlags};

/// Requestable operating mode for [`start`](crate::hwtimer::TimerOps::start).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Count down from the programmed value once; the slot disarms itself
    /// after the fire is dispatched.
    OneShot,
    /// Count down from the programmed value and auto-reload; fires until
    /// stopped.
    Periodic,
    /// Count up over the full 32-bit range with a programmable match
    /// point; fires on match and on every rollover.
    Monotone,
}

impl Mode {
    /// Counting discipline programmed into the peripheral for this mode.
    pub(crate) fn count_mode(self) -> CountMode {
        match self {
            Mode::OneShot => CountMode::OneShotDown,
            Mode::Periodic => CountMode::PeriodicDown,
            Mode::Monotone => CountMode::PeriodicUp,
        }
    }

    /// Interrupt causes armed when a slot starts in this mode.
    pub(crate) fn armed_flags(self) -> IrqFlags {
        match self {
            Mode::OneShot | Mode::Periodic => IrqFlags::TIMEOUT,
            Mode::Monotone => IrqFlags::TIMEOUT | IrqFlags::MATCH,
        }
    }
}

/// Per-slot activity state. `Idle` covers both never-started and stopped;
/// the active states mirror the mode the slot was started in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub(crate) enum SlotState {
    Idle,
    OneShot,
    Periodic,
    Monotone,
}

impl SlotState {
    /// Active state entered by a successful start in `mode`.
    pub(crate) fn of(mode: Mode) -> Self {
        match mode {
            Mode::OneShot => SlotState::OneShot,
            Mode::Periodic => SlotState::Periodic,
            Mode::Monotone => SlotState::Monotone,
        }
    }

    /// True in any state other than `Idle`.
    pub(crate) fn is_active(self) -> bool {
        !matches!(self, SlotState::Idle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_never_yields_idle() {
        for mode in [Mode::OneShot, Mode::Periodic, Mode::Monotone] {
            assert!(SlotState::of(mode).is_active());
        }
    }

    #[test]
    fn idle_is_the_only_inactive_state() {
        assert!(!SlotState::Idle.is_active());
        assert!(SlotState::OneShot.is_active());
        assert!(SlotState::Periodic.is_active());
        assert!(SlotState::Monotone.is_active());
    }

    #[test]
    fn countdown_modes_arm_timeout_only() {
        assert_eq!(Mode::OneShot.armed_flags(), IrqFlags::TIMEOUT);
        assert_eq!(Mode::Periodic.armed_flags(), IrqFlags::TIMEOUT);
    }

    #[test]
    fn monotone_arms_rollover_and_match() {
        assert_eq!(
            Mode::Monotone.armed_flags(),
            IrqFlags::TIMEOUT | IrqFlags::MATCH
        );
    }

    #[test]
    fn monotone_counts_upward() {
        assert_eq!(Mode::Monotone.count_mode(), CountMode::PeriodicUp);
        assert_eq!(Mode::OneShot.count_mode(), CountMode::OneShotDown);
        assert_eq!(Mode::Periodic.count_mode(), CountMode::PeriodicDown);
    }
}
