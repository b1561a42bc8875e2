//! Timer pool: allocation, mode transitions, queries, interrupt dispatch

use heapless::Vec;
use tempo_hal::{IrqControl, IrqFlags, IrqGuard, TimerRegs};

use super::config::{Binding, OnFire, TimerConfig};
use super::error::TimerError;
use super::mode::{Mode, SlotState};
use super::ops::TimerOps;
use super::slot::Slot;
use super::ticks::{wrap_distance, FREE_RUN_LOAD};

/// Opaque reference to one allocated timer slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimerHandle(pub(crate) usize);

/// Fixed-capacity pool of 32-bit timer peripherals.
///
/// The pool owns an arena of `N` slots, an explicit free-index stack, and
/// the two injected hardware capabilities. It is constructed once by the
/// owning application and reached by reference from every call site; there
/// is no global instance. Slots are popped from the free stack at
/// allocation and never pushed back, so capacity consumption is monotonic
/// for the life of the pool.
///
/// # Execution contexts
///
/// Foreground code drives the pool through [`alloc`](TimerPool::alloc) and
/// the [`TimerOps`] operations; the platform's interrupt vector enters
/// through [`on_interrupt`](TimerPool::on_interrupt). Per-slot state is
/// shared between the two, so every foreground operation masks interrupts
/// via the injected [`IrqControl`] for its duration and restores the prior
/// state on every exit path. `on_interrupt` runs with its own line already
/// masked by the platform and takes no guard of its own.
pub struct TimerPool<R, I, H, const N: usize> {
    regs: R,
    irq: I,
    slots: [Slot<H>; N],
    free: Vec<usize, N>,
}

impl<R: TimerRegs, I: IrqControl, H: OnFire, const N: usize> TimerPool<R, I, H, N> {
    /// Build a pool over all `N` slots.
    pub fn new(regs: R, irq: I) -> Self {
        let mut free = Vec::new();
        // Stacked in reverse so slot 0 is handed out first.
        for index in (0..N).rev() {
            let _ = free.push(index);
        }
        Self {
            regs,
            irq,
            slots: core::array::from_fn(|_| Slot::vacant()),
            free,
        }
    }

    /// Allocate a slot, binding its hardware address, tick frequency, and
    /// fire handling.
    ///
    /// A [`Binding::Delegate`] is attached before the slot is consumed:
    /// rejection returns [`TimerError::DelegateRejected`] and leaves the
    /// slot available. An exhausted pool stays exhausted - there is no
    /// deallocation.
    pub fn alloc(
        &mut self,
        cfg: TimerConfig,
        binding: Binding<'_, H>,
    ) -> Result<TimerHandle, TimerError> {
        let Some(&index) = self.free.last() else {
            return Err(TimerError::PoolExhausted);
        };
        let handle = TimerHandle(index);

        let handler = match binding {
            Binding::Handler(handler) => Some(handler),
            Binding::Delegate(delegate) => {
                if delegate.attach(handle).is_err() {
                    return Err(TimerError::DelegateRejected);
                }
                None
            }
        };

        let _ = self.free.pop();
        self.slots[index].bind(cfg, handler);
        Ok(handle)
    }

    /// Interrupt-context entry point, called by the platform's vector for
    /// the slot's peripheral.
    ///
    /// Reads and acknowledges the hardware status. Interrupts that arrive
    /// for an idle slot, or carry cause bits the slot never armed, are
    /// treated as stale: acknowledged without dispatch. A one-shot slot is
    /// disarmed strictly AFTER its handler returns - handler authors must
    /// assume the slot is idle again once dispatch completes.
    pub fn on_interrupt(&mut self, handle: TimerHandle) {
        let Some(slot) = lookup(&mut self.slots, handle) else {
            return;
        };

        let status = self.regs.irq_status(slot.base);

        if !slot.state.is_active() || !slot.armed.contains(status) {
            self.regs.irq_clear(slot.base, status);
            return;
        }

        // Rollover accounting happens before dispatch so the handler
        // observes the count including the fire it is being told about.
        if slot.state == SlotState::Monotone && status.contains(IrqFlags::TIMEOUT) {
            slot.rollovers = slot.rollovers.wrapping_add(1);
        }

        if let Some(handler) = slot.handler.as_mut() {
            handler.on_fire();
        }

        if slot.state == SlotState::OneShot {
            self.regs.count_disable(slot.base);
            self.regs.irq_disable(slot.base, slot.armed);
            slot.disarm();
        }

        self.regs.irq_clear(slot.base, status);
    }
}

impl<R: TimerRegs, I: IrqControl, H: OnFire, const N: usize> TimerOps
    for TimerPool<R, I, H, N>
{
    type Handler = H;

    fn start(
        &mut self,
        handle: TimerHandle,
        expires: u32,
        mode: Mode,
    ) -> Result<(), TimerError> {
        let _cs = IrqGuard::enter(&mut self.irq);

        let slot = lookup(&mut self.slots, handle).ok_or(TimerError::InvalidHandle)?;
        if slot.state.is_active() {
            return Err(TimerError::InvalidState);
        }

        let base = slot.base;
        self.regs.configure(base, mode.count_mode());
        match mode {
            Mode::OneShot | Mode::Periodic => {
                self.regs.set_load(base, expires);
            }
            Mode::Monotone => {
                self.regs.set_load(base, FREE_RUN_LOAD);
                self.regs.set_match(base, expires);
            }
        }
        slot.arm(mode);

        self.regs.irq_enable(base, slot.armed);
        self.regs.count_enable(base);
        Ok(())
    }

    fn update(&mut self, handle: TimerHandle, expires: u32) -> Result<(), TimerError> {
        let _cs = IrqGuard::enter(&mut self.irq);

        let slot = lookup(&mut self.slots, handle).ok_or(TimerError::InvalidHandle)?;
        match slot.state {
            SlotState::Idle => Err(TimerError::InvalidState),
            SlotState::OneShot | SlotState::Periodic => {
                self.regs.set_load(slot.base, expires);
                Ok(())
            }
            SlotState::Monotone => {
                self.regs.set_match(slot.base, expires);
                Ok(())
            }
        }
    }

    fn stop(&mut self, handle: TimerHandle) -> Result<(), TimerError> {
        let _cs = IrqGuard::enter(&mut self.irq);

        let slot = lookup(&mut self.slots, handle).ok_or(TimerError::InvalidHandle)?;
        if !slot.state.is_active() {
            return Err(TimerError::InvalidState);
        }

        self.regs.count_disable(slot.base);
        self.regs.irq_disable(slot.base, slot.armed);
        slot.disarm();
        Ok(())
    }

    fn is_running(&mut self, handle: TimerHandle) -> bool {
        let _cs = IrqGuard::enter(&mut self.irq);
        lookup(&mut self.slots, handle).map_or(false, |slot| slot.state.is_active())
    }

    fn remaining(&mut self, handle: TimerHandle) -> Result<u32, TimerError> {
        let _cs = IrqGuard::enter(&mut self.irq);

        let slot = lookup(&mut self.slots, handle).ok_or(TimerError::InvalidHandle)?;
        match slot.state {
            SlotState::Idle => Err(TimerError::InvalidState),
            SlotState::OneShot | SlotState::Periodic => Ok(self.regs.value(slot.base)),
            SlotState::Monotone => {
                let current = self.regs.value(slot.base);
                let target = self.regs.match_value(slot.base);
                Ok(wrap_distance(current, target))
            }
        }
    }

    fn current(&mut self, handle: TimerHandle) -> Result<u32, TimerError> {
        let _cs = IrqGuard::enter(&mut self.irq);

        let slot = lookup(&mut self.slots, handle).ok_or(TimerError::InvalidHandle)?;
        match slot.state {
            SlotState::Idle => Err(TimerError::InvalidState),
            SlotState::OneShot | SlotState::Periodic => {
                // The register counts down from the load value.
                let load = self.regs.load(slot.base);
                Ok(load.wrapping_sub(self.regs.value(slot.base)))
            }
            SlotState::Monotone => Ok(self.regs.value(slot.base)),
        }
    }

    fn rollovers(&mut self, handle: TimerHandle) -> u32 {
        let _cs = IrqGuard::enter(&mut self.irq);
        lookup(&mut self.slots, handle).map_or(0, |slot| slot.rollovers)
    }

    fn frequency(&mut self, handle: TimerHandle) -> u32 {
        let _cs = IrqGuard::enter(&mut self.irq);
        lookup(&mut self.slots, handle).map_or(0, |slot| slot.freq_hz)
    }

    fn register_handler(&mut self, handle: TimerHandle, handler: H) -> Result<(), TimerError> {
        let _cs = IrqGuard::enter(&mut self.irq);

        let slot = lookup(&mut self.slots, handle).ok_or(TimerError::InvalidHandle)?;
        if slot.handler.is_some() {
            return Err(TimerError::AlreadyBound);
        }
        slot.handler = Some(handler);
        Ok(())
    }
}

/// Resolve a handle to its slot, if the slot has been allocated.
fn lookup<H, const N: usize>(
    slots: &mut [Slot<H>; N],
    handle: TimerHandle,
) -> Option<&mut Slot<H>> {
    slots.get_mut(handle.0).filter(|slot| slot.is_bound())
}
