//! Romaji keystroke matching for hiragana words.
//!
//! [`segment`] cuts a word into [`Unit`]s, each of which accepts keystrokes
//! against its romanizations. The moraic nasal is handled by
//! [`NasalResolver`], which defers its decision to the following keystroke.

pub mod nasal;
pub mod segment;
pub mod table;
pub mod unit;

pub use nasal::{nasal_display_patterns, NasalOutcome, NasalResolver, NasalState};
pub use segment::{default_romaji, segment, segment_with};
pub use table::{RomajiTable, TableConfigError};
pub use unit::{DisplayInfo, Unit, UnitMatcher};
