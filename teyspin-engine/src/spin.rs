//! Reveal sequencing for the spin animation.
//!
//! A pick commits its result immediately; this module only decides *when*
//! the committed result is disclosed. The sequencer never influences which
//! entity is chosen, so uniformity can be tested without it.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How a committed pick is disclosed to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevealMode {
    /// Disclose as soon as the pick is committed.
    Instant,
    /// Hold the committed pick until a fixed-duration animation elapses.
    Deferred { duration_ms: u32 },
}

/// Sequencer phase. `Spinning` only ever occurs in deferred mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SpinPhase {
    #[default]
    Idle,
    Spinning,
}

/// A spin is already in progress; the new request is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("a spin is already in progress")]
pub struct SpinBusy;

/// Outcome of [`RevealSequencer::begin`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Disclosure<T> {
    /// Instant mode: the committed value comes straight back.
    Immediate(T),
    /// Deferred mode: the value is held until [`RevealSequencer::finish`].
    Held,
}

/// Two-state machine (`Idle` -> `Spinning` -> `Idle`) guarding disclosure.
///
/// `Spinning` is entered only from `Idle`; a pending reveal always
/// completes. There is no cancellation path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealSequencer<T> {
    mode: RevealMode,
    phase: SpinPhase,
    pending: Option<T>,
}

impl<T> RevealSequencer<T> {
    #[must_use]
    pub const fn new(mode: RevealMode) -> Self {
        Self {
            mode,
            phase: SpinPhase::Idle,
            pending: None,
        }
    }

    #[must_use]
    pub const fn mode(&self) -> RevealMode {
        self.mode
    }

    #[must_use]
    pub const fn phase(&self) -> SpinPhase {
        self.phase
    }

    #[must_use]
    pub const fn is_spinning(&self) -> bool {
        matches!(self.phase, SpinPhase::Spinning)
    }

    /// Delay the view should wait before calling [`finish`]; `None` in
    /// instant mode.
    ///
    /// [`finish`]: RevealSequencer::finish
    #[must_use]
    pub const fn delay_ms(&self) -> Option<u32> {
        match self.mode {
            RevealMode::Deferred { duration_ms } => Some(duration_ms),
            RevealMode::Instant => None,
        }
    }

    /// Commit an already-picked value.
    ///
    /// Instant mode discloses immediately; deferred mode stores the value
    /// and enters `Spinning` until [`finish`] is called.
    ///
    /// # Errors
    ///
    /// Returns [`SpinBusy`] while a deferred reveal is pending; the
    /// in-flight value is kept and the new one discarded.
    ///
    /// [`finish`]: RevealSequencer::finish
    pub fn begin(&mut self, value: T) -> Result<Disclosure<T>, SpinBusy> {
        if self.is_spinning() {
            return Err(SpinBusy);
        }
        match self.mode {
            RevealMode::Instant => Ok(Disclosure::Immediate(value)),
            RevealMode::Deferred { .. } => {
                self.phase = SpinPhase::Spinning;
                self.pending = Some(value);
                Ok(Disclosure::Held)
            }
        }
    }

    /// Complete a deferred reveal, returning to `Idle` and disclosing the
    /// committed value. Returns `None` when nothing was pending.
    pub fn finish(&mut self) -> Option<T> {
        self.phase = SpinPhase::Idle;
        self.pending.take()
    }
}
