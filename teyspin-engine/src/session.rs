//! Per-page session façades over the shared engine.
//!
//! A session is the whole view boundary for one page: pure queries plus
//! commands, no events. The presentation layer re-reads state after every
//! command.

use crate::bosses::{Boss, bosses};
use crate::catalog::Catalog;
use crate::characters::{Character, characters};
use crate::constants::SPIN_DURATION_MS;
use crate::filter::{FilterState, eligible_set};
use crate::names::{NamePool, NamePoolError};
use crate::schema::Entity;
use crate::select::{EmptyPoolError, pick};
use crate::spin::{Disclosure, RevealMode, RevealSequencer, SpinBusy, SpinPhase};
use crate::value::AttrValue;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Caller-visible outcome of a pick request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickOutcome {
    /// Result committed and disclosed immediately.
    Disclosed,
    /// Result committed; disclosure follows once the spin delay elapses.
    Started,
    /// Nothing eligible. The view keeps the pick action disabled.
    EmptyPool,
    /// A spin is already in progress; the request was a no-op.
    Busy,
}

/// One page's engine state: catalog, filter state, reveal sequencing,
/// current selection, and the session RNG.
#[derive(Debug, Clone)]
pub struct WheelSession<E: Entity, R: Rng = SmallRng> {
    catalog: Catalog<E>,
    filters: FilterState,
    sequencer: RevealSequencer<E>,
    selection: Option<E>,
    rng: R,
}

impl<E: Entity + Clone> WheelSession<E> {
    /// Session with a [`SmallRng`] seeded from `seed`.
    #[must_use]
    pub fn new(catalog: Catalog<E>, mode: RevealMode, seed: u64) -> Self {
        Self::with_rng(catalog, mode, SmallRng::seed_from_u64(seed))
    }
}

impl<E: Entity + Clone, R: Rng> WheelSession<E, R> {
    #[must_use]
    pub fn with_rng(catalog: Catalog<E>, mode: RevealMode, rng: R) -> Self {
        Self {
            filters: FilterState::new(E::schema()),
            catalog,
            sequencer: RevealSequencer::new(mode),
            selection: None,
            rng,
        }
    }

    #[must_use]
    pub const fn catalog(&self) -> &Catalog<E> {
        &self.catalog
    }

    #[must_use]
    pub const fn filters(&self) -> &FilterState {
        &self.filters
    }

    /// Entities passing the current filters, in catalog order.
    #[must_use]
    pub fn eligible(&self) -> Vec<&E> {
        eligible_set(&self.catalog, &self.filters)
    }

    #[must_use]
    pub fn domain_of(&self, attribute: &str) -> Vec<AttrValue> {
        self.catalog.domain_of(attribute)
    }

    #[must_use]
    pub const fn selection(&self) -> Option<&E> {
        self.selection.as_ref()
    }

    #[must_use]
    pub const fn phase(&self) -> SpinPhase {
        self.sequencer.phase()
    }

    #[must_use]
    pub const fn is_spinning(&self) -> bool {
        self.sequencer.is_spinning()
    }

    /// Delay before [`complete_spin`] should run; `None` for instant pages.
    ///
    /// [`complete_spin`]: WheelSession::complete_spin
    #[must_use]
    pub const fn spin_delay_ms(&self) -> Option<u32> {
        self.sequencer.delay_ms()
    }

    /// Whether a pick request would commit right now.
    #[must_use]
    pub fn can_pick(&self) -> bool {
        !self.is_spinning() && !self.eligible().is_empty()
    }

    /// Toggle one filter value. Values outside the attribute's observed
    /// domain are ignored, keeping the filter-state invariant. Any change
    /// invalidates the current selection.
    pub fn toggle_filter(&mut self, attribute: &str, value: AttrValue) {
        if !self.catalog.domain_of(attribute).contains(&value) {
            return;
        }
        self.filters.toggle(attribute, value);
        self.selection = None;
    }

    /// Reset every filter; the selection is stale with the wider pool and
    /// is cleared too.
    pub fn clear_filters(&mut self) {
        self.filters.clear();
        self.selection = None;
    }

    /// Commit a uniform pick from the eligible set.
    ///
    /// The entity is chosen here, before any reveal delay; the sequencer
    /// only decides when the choice becomes visible.
    pub fn request_pick(&mut self) -> PickOutcome {
        if self.sequencer.is_spinning() {
            return PickOutcome::Busy;
        }
        let eligible = eligible_set(&self.catalog, &self.filters);
        let chosen = match pick(&eligible, &mut self.rng) {
            Ok(entity) => E::clone(entity),
            Err(EmptyPoolError) => return PickOutcome::EmptyPool,
        };
        self.selection = None;
        match self.sequencer.begin(chosen) {
            Ok(Disclosure::Immediate(entity)) => {
                self.selection = Some(entity);
                PickOutcome::Disclosed
            }
            Ok(Disclosure::Held) => PickOutcome::Started,
            Err(SpinBusy) => PickOutcome::Busy,
        }
    }

    /// Disclose the committed result once the spin delay has elapsed.
    /// Harmless when idle: the existing selection is returned unchanged.
    pub fn complete_spin(&mut self) -> Option<&E> {
        if let Some(entity) = self.sequencer.finish() {
            self.selection = Some(entity);
        }
        self.selection.as_ref()
    }
}

/// Character roulette page: deferred reveal behind the spin animation.
#[must_use]
pub fn character_session(seed: u64) -> WheelSession<Character> {
    WheelSession::new(
        characters().clone(),
        RevealMode::Deferred {
            duration_ms: SPIN_DURATION_MS,
        },
        seed,
    )
}

/// Boss directory page: instant reveal over the name-sorted catalog.
#[must_use]
pub fn boss_session(seed: u64) -> WheelSession<Boss> {
    WheelSession::new(bosses().clone(), RevealMode::Instant, seed)
}

/// Custom wheel page: name pool, no attribute filters, instant reveal.
#[derive(Debug, Clone)]
pub struct CustomWheelSession<R: Rng = SmallRng> {
    pool: NamePool,
    selection: Option<String>,
    rng: R,
}

impl CustomWheelSession {
    /// Session over the default predefined names, RNG seeded from `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_rng(NamePool::new(), SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> CustomWheelSession<R> {
    #[must_use]
    pub fn with_rng(pool: NamePool, rng: R) -> Self {
        Self {
            pool,
            selection: None,
            rng,
        }
    }

    #[must_use]
    pub const fn pool(&self) -> &NamePool {
        &self.pool
    }

    /// Active wheel entries, predefined before temporary.
    #[must_use]
    pub fn entries(&self) -> Vec<String> {
        self.pool.entries()
    }

    #[must_use]
    pub fn selection(&self) -> Option<&str> {
        self.selection.as_deref()
    }

    #[must_use]
    pub fn can_pick(&self) -> bool {
        !self.pool.is_empty()
    }

    /// Flip a predefined name's enabled flag; invalidates the selection.
    pub fn toggle_name(&mut self, name: &str) {
        self.pool.toggle_predefined(name);
        self.selection = None;
    }

    /// Add a temporary name. Rejections leave the pool and selection
    /// untouched; the view treats them as silent no-ops.
    ///
    /// # Errors
    ///
    /// Propagates [`NamePoolError`] from the pool.
    pub fn add_name(&mut self, name: &str) -> Result<(), NamePoolError> {
        self.pool.add(name)?;
        self.selection = None;
        Ok(())
    }

    /// Remove a temporary name; invalidates the selection on success.
    pub fn remove_name(&mut self, name: &str) {
        if self.pool.remove(name) {
            self.selection = None;
        }
    }

    /// Uniform pick across the combined pool, disclosed immediately.
    pub fn request_pick(&mut self) -> PickOutcome {
        let entries = self.pool.entries();
        match pick(&entries, &mut self.rng) {
            Ok(name) => {
                self.selection = Some(name.clone());
                PickOutcome::Disclosed
            }
            Err(EmptyPoolError) => PickOutcome::EmptyPool,
        }
    }
}
