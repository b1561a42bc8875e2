//! Arena slot bookkeeping

use tempo_hal::IrqFlags;

use super::config::TimerConfig;
use super::mode::{Mode, SlotState};

/// One arena entry. Identity is the position in the pool's arena; a slot
/// is inert until [`bind`](Slot::bind) and never returns to the free stack
/// afterwards.
pub(crate) struct Slot<H> {
    pub(crate) base: u32,
    pub(crate) freq_hz: u32,
    pub(crate) armed: IrqFlags,
    pub(crate) rollovers: u32,
    pub(crate) handler: Option<H>,
    pub(crate) state: SlotState,
    bound: bool,
}

impl<H> Slot<H> {
    pub(crate) fn vacant() -> Self {
        Self {
            base: 0,
            freq_hz: 0,
            armed: IrqFlags::empty(),
            rollovers: 0,
            handler: None,
            state: SlotState::Idle,
            bound: false,
        }
    }

    /// Take the slot into service. Runs once, at allocation.
    pub(crate) fn bind(&mut self, cfg: TimerConfig, handler: Option<H>) {
        self.base = cfg.base;
        self.freq_hz = cfg.freq_hz;
        self.armed = IrqFlags::empty();
        self.rollovers = 0;
        self.handler = handler;
        self.state = SlotState::Idle;
        self.bound = true;
    }

    pub(crate) fn is_bound(&self) -> bool {
        self.bound
    }

    /// Record a successful start.
    pub(crate) fn arm(&mut self, mode: Mode) {
        self.armed = mode.armed_flags();
        self.state = SlotState::of(mode);
    }

    /// Return to idle. Rollover accounting resets with the mode.
    pub(crate) fn disarm(&mut self) {
        self.armed = IrqFlags::empty();
        self.rollovers = 0;
        self.state = SlotState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bound_slot() -> Slot<()> {
        let mut slot = Slot::vacant();
        slot.bind(
            TimerConfig {
                base: 0x4003_0000,
                freq_hz: 80_000_000,
            },
            Some(()),
        );
        slot
    }

    #[test]
    fn vacant_slots_are_idle_and_unbound() {
        let slot: Slot<()> = Slot::vacant();
        assert!(!slot.is_bound());
        assert_eq!(slot.state, SlotState::Idle);
        assert!(slot.armed.is_empty());
    }

    #[test]
    fn bind_records_the_config() {
        let slot = bound_slot();
        assert!(slot.is_bound());
        assert_eq!(slot.base, 0x4003_0000);
        assert_eq!(slot.freq_hz, 80_000_000);
        assert_eq!(slot.state, SlotState::Idle);
    }

    #[test]
    fn arm_then_disarm_resets_rollover_accounting() {
        let mut slot = bound_slot();
        slot.arm(Mode::Monotone);
        slot.rollovers = 7;

        slot.disarm();
        assert_eq!(slot.rollovers, 0);
        assert_eq!(slot.state, SlotState::Idle);
        assert!(slot.armed.is_empty());
    }

    #[test]
    fn arm_tracks_the_requested_mode() {
        let mut slot = bound_slot();
        slot.arm(Mode::Periodic);
        assert_eq!(slot.state, SlotState::Periodic);
        assert_eq!(slot.armed, Mode::Periodic.armed_flags());
    }
}
