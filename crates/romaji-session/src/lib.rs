//! Word-level keystroke matching.
//!
//! `WordMatcher` owns the units of one word, walks a cursor over them and
//! returns a [`KeyResponse`] per keystroke. The response that completes the
//! word carries the [`WordResult`] handed to scoring.

mod key_handler;
mod types;

#[cfg(test)]
mod tests;

use romaji_core::{segment, segment_with, DisplayInfo, RomajiTable, Unit};

pub use types::{now_millis, DetailedProgress, KeyResponse, WordResult};

/// Matcher for one word instance. Discard it (or [`reset`](Self::reset)) on retry.
pub struct WordMatcher {
    hiragana: String,
    units: Vec<Unit>,
    index: usize,
    key_count: u32,
    mistake_count: u32,
    start_time: Option<u64>,
}

impl WordMatcher {
    pub fn new(hiragana: &str) -> Self {
        Self::from_units(hiragana, segment(hiragana))
    }

    pub fn with_table(table: &RomajiTable, hiragana: &str) -> Self {
        Self::from_units(hiragana, segment_with(table, hiragana))
    }

    pub fn from_units(hiragana: &str, units: Vec<Unit>) -> Self {
        Self {
            hiragana: hiragana.to_string(),
            units,
            index: 0,
            key_count: 0,
            mistake_count: 0,
            start_time: None,
        }
    }

    pub fn hiragana(&self) -> &str {
        &self.hiragana
    }

    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current_unit(&self) -> Option<&Unit> {
        self.units.get(self.index)
    }

    pub fn key_count(&self) -> u32 {
        self.key_count
    }

    pub fn mistake_count(&self) -> u32 {
        self.mistake_count
    }

    pub fn start_time(&self) -> Option<u64> {
        self.start_time
    }

    pub fn is_completed(&self) -> bool {
        self.index >= self.units.len()
    }

    /// Clear all typed input and counters, keeping the same units.
    pub fn reset(&mut self) {
        for unit in &mut self.units {
            unit.reset();
        }
        self.index = 0;
        self.key_count = 0;
        self.mistake_count = 0;
        self.start_time = None;
    }

    pub fn current_display(&self) -> Option<DisplayInfo> {
        self.current_unit().map(Unit::display_info)
    }

    /// Percentage of units completed, rounded down.
    pub fn progress_percent(&self) -> u32 {
        if self.units.is_empty() {
            return 0;
        }
        (self.index * 100 / self.units.len()) as u32
    }

    /// Length of the default romanization of the whole word.
    pub fn total_romaji_len(&self) -> usize {
        self.units.iter().map(Unit::base_point).sum()
    }

    /// Romaji still to type, counting the shortest remaining spelling.
    pub fn remaining_romaji_len(&self) -> usize {
        self.units[self.index..]
            .iter()
            .filter(|u| !u.is_completed())
            .map(|u| u.remaining().len())
            .sum()
    }

    /// Sum of the base points of the completed units.
    pub fn points(&self) -> usize {
        self.units.iter().map(Unit::point).sum()
    }

    /// Everything typed so far, across units.
    pub fn typed_romaji(&self) -> String {
        self.units.iter().map(Unit::typed).collect()
    }

    /// The shortest romaji that would finish the word from here.
    pub fn remaining_romaji(&self) -> String {
        self.units[self.index..].iter().map(Unit::remaining).collect()
    }

    pub fn detailed_progress(&self) -> DetailedProgress {
        DetailedProgress {
            current_kana_index: self.index,
            current_romaji_index: self.current_unit().map_or(0, |u| u.typed().len()),
            total_kana_count: self.units.len(),
            total_romaji_count: self.total_romaji_len(),
            current: self.current_display(),
        }
    }
}
