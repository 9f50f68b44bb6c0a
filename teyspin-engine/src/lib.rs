//! Teyspin Selection Engine
//!
//! Platform-agnostic core for the Teyvat Companion Hub: immutable entity
//! catalogs, attribute domain extraction, multi-select filtering, uniform
//! random selection, and reveal sequencing for the spin animation. This
//! crate provides all selection mechanics without UI or platform-specific
//! dependencies; the web crate renders what it exposes.

pub mod bosses;
pub mod catalog;
pub mod characters;
pub mod constants;
pub mod filter;
pub mod names;
pub mod schema;
pub mod select;
pub mod session;
pub mod spin;
pub mod value;

// Re-export commonly used types
pub use bosses::{BOSS_SCHEMA, Boss, BossList, bosses};
pub use catalog::{Catalog, SchemaError};
pub use characters::{CHARACTER_SCHEMA, Character, CharacterList, characters};
pub use constants::{SPIN_BASE_TURNS, SPIN_DURATION_MS, SPIN_EXTRA_TURNS};
pub use filter::{FilterState, eligible_set, is_eligible};
pub use names::{NamePool, NamePoolError, PREDEFINED_NAMES};
pub use schema::{AttributeDef, Cardinality, Entity};
pub use select::{EmptyPoolError, pick};
pub use session::{
    CustomWheelSession, PickOutcome, WheelSession, boss_session, character_session,
};
pub use spin::{Disclosure, RevealMode, RevealSequencer, SpinBusy, SpinPhase};
pub use value::{AttrValue, ValueSet};
