//! The slot operations table

use super::error::TimerError;
use super::mode::Mode;
use super::pool::TimerHandle;

/// The operations every allocated slot supports, handle-first.
///
/// [`TimerPool`](crate::hwtimer::TimerPool) implements this. Delegates and
/// other subsystems that drive timers are written against
/// `&mut impl TimerOps` so they never see the pool's concrete type
/// parameters.
pub trait TimerOps {
    /// Handler type accepted by
    /// [`register_handler`](TimerOps::register_handler).
    type Handler;

    /// Arm an idle slot in `mode`. `expires` is the countdown load value
    /// in one-shot and periodic modes, the match point in monotone mode.
    ///
    /// Fails with [`TimerError::InvalidState`] when the slot is already
    /// running; hardware and slot state are left untouched in that case.
    fn start(&mut self, handle: TimerHandle, expires: u32, mode: Mode)
        -> Result<(), TimerError>;

    /// Reprogram an active slot's expiry without stopping the counter: the
    /// load value in one-shot/periodic modes, the match value in monotone
    /// mode.
    fn update(&mut self, handle: TimerHandle, expires: u32) -> Result<(), TimerError>;

    /// Disarm an active slot: counting and its interrupts stop, rollover
    /// accounting resets, and the slot returns to idle.
    fn stop(&mut self, handle: TimerHandle) -> Result<(), TimerError>;

    /// True while the slot is in any mode other than idle. False for an
    /// unknown handle.
    fn is_running(&mut self, handle: TimerHandle) -> bool;

    /// Ticks until the next fire. Countdown modes report the live counter
    /// value; monotone mode reports the wrap-aware forward distance from
    /// the current counter value to the match point.
    fn remaining(&mut self, handle: TimerHandle) -> Result<u32, TimerError>;

    /// Ticks elapsed since start in countdown modes; the raw counter value
    /// in monotone mode.
    fn current(&mut self, handle: TimerHandle) -> Result<u32, TimerError>;

    /// Accumulated rollover count. 0 when the slot is idle, has never
    /// rolled over, or the handle is unknown.
    fn rollovers(&mut self, handle: TimerHandle) -> u32;

    /// Configured tick frequency, regardless of activity. 0 for an
    /// unknown handle.
    fn frequency(&mut self, handle: TimerHandle) -> u32;

    /// Bind the fire handler, exactly once per slot.
    fn register_handler(
        &mut self,
        handle: TimerHandle,
        handler: Self::Handler,
    ) -> Result<(), TimerError>;
}
