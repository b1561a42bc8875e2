//! Slot binding: configuration bundle, callback capability, delegates

use super::pool::TimerHandle;

/// Static configuration bound to a slot at allocation time.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimerConfig {
    /// Peripheral base address, passed through to the register capability.
    pub base: u32,
    /// Tick frequency in hertz. Informational: reported by
    /// [`frequency`](crate::hwtimer::TimerOps::frequency), never programmed
    /// into hardware.
    pub freq_hz: u32,
}

/// Callback capability dispatched when a slot fires.
///
/// Bound at most once per slot - either at allocation or later through
/// [`register_handler`](crate::hwtimer::TimerOps::register_handler) - and
/// immutable for the slot's lifetime after that.
pub trait OnFire {
    /// Invoked from interrupt context on every dispatched fire.
    fn on_fire(&mut self);
}

/// Any `FnMut()` closure works as a handler.
impl<F: FnMut()> OnFire for F {
    fn on_fire(&mut self) {
        self()
    }
}

/// Refusal returned by [`TimerDelegate::attach`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttachRejected;

/// External subsystem that takes over fire forwarding for a slot.
///
/// `attach` runs during allocation and receives the handle the slot will
/// have; returning `Err` aborts the allocation without consuming the slot.
/// An attached delegate drives the slot through the regular
/// [`TimerOps`](crate::hwtimer::TimerOps) operations and installs its
/// forwarding handler with `register_handler`. Fires that arrive before
/// the handler is installed are accounted (rollovers) but not forwarded.
pub trait TimerDelegate {
    /// Accept or reject ownership of a freshly allocated slot.
    fn attach(&mut self, handle: TimerHandle) -> Result<(), AttachRejected>;
}

/// What a slot is bound to at allocation time.
pub enum Binding<'d, H> {
    /// Dispatch fires directly to this handler.
    Handler(H),
    /// Hand the slot to a delegate; the handler arrives later through
    /// `register_handler`.
    Delegate(&'d mut dyn TimerDelegate),
}
