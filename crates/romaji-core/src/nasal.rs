//! Moraic nasal (ん) resolution.
//!
//! A single "n" cannot be judged on its own: "nn" completes the nasal as a
//! doubled nasal, while a consonant that can start the following mora ends the
//! nasal as a bare "n" and is then shared with that mora. [`NasalResolver`]
//! holds the unit in [`NasalState::Branching`] until that keystroke arrives.

use tracing::debug;

use crate::table::{is_consonant, RomajiTable, NASAL, SOKUON};
use crate::unit::{Unit, UnitMatcher};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NasalState {
    /// No bare "n" accepted yet.
    Normal,
    /// Exactly one "n" accepted; the next key decides.
    Branching,
    /// Completed as "nn" or "xn".
    ResolvedDouble,
    /// Completed as "n"; the deciding key belongs to the following unit.
    ResolvedSingle,
}

/// Result of feeding the deciding keystroke to a branching nasal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NasalOutcome {
    /// A second "n" completed the nasal.
    Double,
    /// The nasal completed as "n"; re-dispatch the same key to the next unit.
    Continue,
    /// The key fits neither reading. Nothing changed.
    Mismatch,
}

#[derive(Debug, Clone)]
pub struct NasalResolver {
    matcher: UnitMatcher,
    state: NasalState,
}

impl NasalResolver {
    pub fn new(patterns: Vec<String>) -> Self {
        Self {
            matcher: UnitMatcher::new(NASAL.to_string(), patterns),
            state: NasalState::Normal,
        }
    }

    pub fn matcher(&self) -> &UnitMatcher {
        &self.matcher
    }

    pub fn state(&self) -> NasalState {
        self.state
    }

    pub fn can_accept(&self, key: char) -> bool {
        match self.state {
            NasalState::Normal => self.matcher.can_accept(key),
            NasalState::Branching => key.to_ascii_lowercase() == 'n',
            NasalState::ResolvedDouble | NasalState::ResolvedSingle => false,
        }
    }

    /// Feed a keystroke without knowledge of the following unit.
    ///
    /// While branching this can only complete the nasal with a second "n";
    /// use [`NasalResolver::resolve`] when the following unit is known.
    pub fn accept(&mut self, key: char) -> bool {
        match self.state {
            NasalState::Normal => self.accept_normal(key),
            NasalState::Branching => self.resolve(key, None) == NasalOutcome::Double,
            NasalState::ResolvedDouble | NasalState::ResolvedSingle => false,
        }
    }

    fn accept_normal(&mut self, key: char) -> bool {
        let key = key.to_ascii_lowercase();
        if key == 'n' && self.matcher.typed().is_empty() && self.has_long_n_pattern() {
            self.matcher.set_typed("n", false);
            self.state = NasalState::Branching;
            return true;
        }
        if !self.matcher.accept(key) {
            return false;
        }
        if self.matcher.is_completed() {
            self.state = NasalState::ResolvedDouble;
        }
        true
    }

    /// Decide a branching nasal with the keystroke that follows the first "n".
    pub fn resolve(&mut self, key: char, next: Option<&Unit>) -> NasalOutcome {
        if self.state != NasalState::Branching {
            return NasalOutcome::Mismatch;
        }
        let key = key.to_ascii_lowercase();

        // A literal second "n" always means "nn", even before な行.
        if key == 'n' {
            self.matcher.set_typed("nn", true);
            self.state = NasalState::ResolvedDouble;
            debug!(resolved = "nn");
            return NasalOutcome::Double;
        }

        let continues = next.is_some_and(|unit| {
            is_consonant(key) && unit.patterns().iter().any(|p| p.starts_with(key))
        });
        if continues {
            self.matcher.set_typed("n", true);
            self.state = NasalState::ResolvedSingle;
            debug!(resolved = "n", shared_key = %key);
            return NasalOutcome::Continue;
        }

        debug!(key = %key, "nasal mismatch");
        NasalOutcome::Mismatch
    }

    pub fn reset(&mut self) {
        self.matcher.reset();
        self.state = NasalState::Normal;
    }

    fn has_long_n_pattern(&self) -> bool {
        self.matcher
            .patterns()
            .iter()
            .any(|p| p.len() > 1 && p.starts_with('n'))
    }
}

/// Advisory romanizations of ん, given the cluster that follows it.
///
/// Only used for display; acceptance is decided by [`NasalResolver`].
pub fn nasal_display_patterns(next: Option<&str>) -> Vec<String> {
    nasal_display_patterns_with(RomajiTable::global(), next)
}

pub fn nasal_display_patterns_with(table: &RomajiTable, next: Option<&str>) -> Vec<String> {
    let allow_single = match next {
        None => false,
        Some(cluster) => match leading_romaji(table, cluster) {
            Some(c) => !matches!(c, 'a' | 'i' | 'u' | 'e' | 'o' | 'y' | 'w' | 'n'),
            None => true,
        },
    };
    let mut patterns = vec!["nn".to_string(), "xn".to_string()];
    if allow_single {
        patterns.push("n".to_string());
    }
    patterns
}

/// First romaji letter of a cluster's display default, including the
/// context-generated clusters.
pub(crate) fn leading_romaji(table: &RomajiTable, cluster: &str) -> Option<char> {
    let mut chars = cluster.chars();
    let first = chars.next()?;
    if chars.next().is_none() {
        if first == NASAL {
            return Some('n');
        }
        if first == SOKUON {
            return Some('x');
        }
    }
    table
        .default_pattern(cluster)
        .and_then(|p| p.chars().next())
        .map(|c| c.to_ascii_lowercase())
}
