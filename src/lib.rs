//! Romaji typing engine.
//!
//! Re-exports the unit-level matcher (`romaji-core`) and the word-level
//! session (`romaji-session`) behind one crate, and installs the optional
//! JSON trace log used when diagnosing keystroke handling.

mod trace_init;

pub use romaji_core::{
    default_romaji, nasal, nasal_display_patterns, segment, segment_with, table, unit,
    DisplayInfo, NasalOutcome, NasalResolver, NasalState, RomajiTable, TableConfigError, Unit,
    UnitMatcher,
};
pub use romaji_session::{now_millis, DetailedProgress, KeyResponse, WordMatcher, WordResult};
pub use trace_init::init_tracing;
