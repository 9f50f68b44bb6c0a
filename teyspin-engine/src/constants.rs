//! Shared engine constants.

/// Spin animation length before a deferred pick is disclosed.
pub const SPIN_DURATION_MS: u32 = 3_000;

/// Full wheel turns every spin makes at minimum.
pub const SPIN_BASE_TURNS: u32 = 5;

/// Upper bound on the extra random full turns added per spin.
pub const SPIN_EXTRA_TURNS: u32 = 5;
