//! Driver error type

/// Errors returned by pool allocation and per-slot operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimerError {
    /// Every slot in the pool has been handed out. Exhaustion is permanent
    /// because slots are never returned; size the pool for the maximum
    /// number of concurrently needed timers.
    PoolExhausted,
    /// A delegate refused the slot during allocation.
    DelegateRejected,
    /// The handle does not name an allocated slot.
    InvalidHandle,
    /// The operation requires the opposite activity state: `start` needs an
    /// idle slot; `update`, `stop`, and the live queries need an active one.
    InvalidState,
    /// The slot already has a handler bound; handlers are set exactly once.
    AlreadyBound,
}
