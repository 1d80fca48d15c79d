//! Per-mora keystroke matching.
//!
//! A [`Unit`] is one matchable piece of a word (a kana or youon cluster, a
//! sokuon, or a moraic nasal) together with the romaji typed into it so far.

use serde::Serialize;

use crate::nasal::{NasalResolver, NasalState};

/// What the UI needs to render one unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayInfo {
    pub display_text: String,
    pub accepted_text: String,
    pub remaining_text: String,
    pub is_completed: bool,
}

/// Prefix matcher over a fixed list of romanizations.
#[derive(Debug, Clone)]
pub struct UnitMatcher {
    kana: String,
    patterns: Vec<String>,
    typed: String,
    remaining: String,
    completed: bool,
}

impl UnitMatcher {
    pub fn new(kana: impl Into<String>, patterns: Vec<String>) -> Self {
        let patterns = patterns
            .into_iter()
            .map(|p| p.to_ascii_lowercase())
            .collect();
        let mut matcher = Self {
            kana: kana.into(),
            patterns,
            typed: String::new(),
            remaining: String::new(),
            completed: false,
        };
        matcher.update_remaining();
        matcher
    }

    pub fn kana(&self) -> &str {
        &self.kana
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    pub fn typed(&self) -> &str {
        &self.typed
    }

    pub fn remaining(&self) -> &str {
        &self.remaining
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Whether `key` would extend the typed input towards some pattern.
    pub fn can_accept(&self, key: char) -> bool {
        if self.completed {
            return false;
        }
        let extended = self.extended(key);
        self.patterns.iter().any(|p| p.starts_with(&extended))
    }

    /// Feed one keystroke. Returns false (and changes nothing) on a mismatch.
    pub fn accept(&mut self, key: char) -> bool {
        if !self.can_accept(key) {
            return false;
        }
        let extended = self.extended(key);
        self.completed = self.patterns.iter().any(|p| *p == extended);
        self.typed = extended;
        self.update_remaining();
        true
    }

    pub fn reset(&mut self) {
        self.typed.clear();
        self.completed = false;
        self.update_remaining();
    }

    /// Overwrite the typed input. Used by the nasal resolver, which decides
    /// completion from context rather than by pattern equality.
    pub(crate) fn set_typed(&mut self, typed: &str, completed: bool) {
        self.typed.clear();
        self.typed.push_str(typed);
        self.completed = completed;
        self.update_remaining();
    }

    /// Length of the display default, used as the unit's score weight.
    pub fn base_point(&self) -> usize {
        self.patterns.first().map_or(0, String::len)
    }

    pub fn point(&self) -> usize {
        if self.completed {
            self.base_point()
        } else {
            0
        }
    }

    /// Fraction of the default pattern typed so far.
    pub fn progress(&self) -> f64 {
        match self.base_point() {
            0 => 1.0,
            len => self.typed.len() as f64 / len as f64,
        }
    }

    pub fn display_info(&self) -> DisplayInfo {
        DisplayInfo {
            display_text: self.kana.clone(),
            accepted_text: self.typed.clone(),
            remaining_text: self.remaining.clone(),
            is_completed: self.completed,
        }
    }

    fn extended(&self, key: char) -> String {
        let mut extended = String::with_capacity(self.typed.len() + key.len_utf8());
        extended.push_str(&self.typed);
        extended.push(key.to_ascii_lowercase());
        extended
    }

    /// Shortest suffix still needed over all patterns consistent with the
    /// typed input. Ties go to the earlier pattern.
    fn update_remaining(&mut self) {
        self.remaining.clear();
        if self.completed {
            return;
        }
        let best = self
            .patterns
            .iter()
            .filter(|p| p.starts_with(&self.typed))
            .map(|p| &p[self.typed.len()..])
            .fold(None, |best: Option<&str>, rest| match best {
                Some(b) if b.len() <= rest.len() => Some(b),
                _ => Some(rest),
            });
        if let Some(rest) = best {
            self.remaining.push_str(rest);
        }
    }
}

/// One matchable unit of a word.
#[derive(Debug, Clone)]
pub enum Unit {
    /// A kana or youon cluster with fixed romanizations.
    Plain(UnitMatcher),
    /// っ, whose patterns were derived from the following mora.
    Sokuon(UnitMatcher),
    /// ん, resolved against the following keystroke.
    Nasal(NasalResolver),
}

impl Unit {
    pub fn plain(kana: impl Into<String>, patterns: Vec<String>) -> Self {
        Unit::Plain(UnitMatcher::new(kana, patterns))
    }

    pub fn matcher(&self) -> &UnitMatcher {
        match self {
            Unit::Plain(m) | Unit::Sokuon(m) => m,
            Unit::Nasal(n) => n.matcher(),
        }
    }

    pub fn kana(&self) -> &str {
        self.matcher().kana()
    }

    pub fn patterns(&self) -> &[String] {
        self.matcher().patterns()
    }

    pub fn typed(&self) -> &str {
        self.matcher().typed()
    }

    pub fn remaining(&self) -> &str {
        self.matcher().remaining()
    }

    pub fn is_completed(&self) -> bool {
        self.matcher().is_completed()
    }

    pub fn is_nasal(&self) -> bool {
        matches!(self, Unit::Nasal(_))
    }

    /// True while a ん has taken one "n" and waits for the deciding key.
    pub fn is_branching(&self) -> bool {
        matches!(self, Unit::Nasal(n) if n.state() == NasalState::Branching)
    }

    /// The resolver of a ん that is waiting for its deciding keystroke.
    pub fn as_branching_nasal_mut(&mut self) -> Option<&mut NasalResolver> {
        match self {
            Unit::Nasal(n) if n.state() == NasalState::Branching => Some(n),
            _ => None,
        }
    }

    pub fn can_accept(&self, key: char) -> bool {
        match self {
            Unit::Plain(m) | Unit::Sokuon(m) => m.can_accept(key),
            Unit::Nasal(n) => n.can_accept(key),
        }
    }

    pub fn accept(&mut self, key: char) -> bool {
        match self {
            Unit::Plain(m) | Unit::Sokuon(m) => m.accept(key),
            Unit::Nasal(n) => n.accept(key),
        }
    }

    pub fn reset(&mut self) {
        match self {
            Unit::Plain(m) | Unit::Sokuon(m) => m.reset(),
            Unit::Nasal(n) => n.reset(),
        }
    }

    pub fn display_info(&self) -> DisplayInfo {
        self.matcher().display_info()
    }

    pub fn base_point(&self) -> usize {
        self.matcher().base_point()
    }

    pub fn point(&self) -> usize {
        self.matcher().point()
    }

    pub fn progress(&self) -> f64 {
        self.matcher().progress()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shi() -> UnitMatcher {
        UnitMatcher::new("し", vec!["si".into(), "shi".into(), "ci".into()])
    }

    #[test]
    fn identity_unit_accepts_non_ascii_uppercase() {
        let mut m = UnitMatcher::new("Ä", vec!["Ä".into()]);
        assert_eq!(m.patterns(), ["Ä"]);
        assert!(m.accept('Ä'));
        assert!(m.is_completed());
    }

    #[test]
    fn fresh_unit_shows_shortest_default() {
        let m = shi();
        assert_eq!(m.typed(), "");
        assert_eq!(m.remaining(), "si");
        assert!(!m.is_completed());
    }

    #[test]
    fn remaining_follows_chosen_spelling() {
        let mut m = shi();
        assert!(m.accept('s'));
        assert_eq!(m.remaining(), "i");
        assert!(m.accept('h'));
        assert_eq!(m.remaining(), "i");
        assert!(m.accept('i'));
        assert!(m.is_completed());
        assert_eq!(m.typed(), "shi");
        assert_eq!(m.remaining(), "");
    }

    #[test]
    fn alternate_leading_letter() {
        let mut m = shi();
        assert!(m.accept('c'));
        assert_eq!(m.remaining(), "i");
        assert!(m.accept('i'));
        assert!(m.is_completed());
    }

    #[test]
    fn mismatch_leaves_state_untouched() {
        let mut m = shi();
        assert!(m.accept('s'));
        assert!(!m.accept('k'));
        assert_eq!(m.typed(), "s");
        assert_eq!(m.remaining(), "i");
        assert!(!m.is_completed());
    }

    #[test]
    fn uppercase_key_is_normalized() {
        let mut m = shi();
        assert!(m.accept('S'));
        assert!(m.accept('I'));
        assert!(m.is_completed());
    }

    #[test]
    fn completed_unit_rejects_further_keys() {
        let mut m = UnitMatcher::new("か", vec!["ka".into()]);
        assert!(m.accept('k'));
        assert!(m.accept('a'));
        assert!(!m.accept('a'));
        assert_eq!(m.typed(), "ka");
    }

    #[test]
    fn remaining_tie_goes_to_declaration_order() {
        let m = UnitMatcher::new("ち", vec!["ti".into(), "ci".into()]);
        assert_eq!(m.remaining(), "ti");
    }

    #[test]
    fn reset_restores_initial_state() {
        let mut m = shi();
        m.accept('s');
        m.accept('i');
        m.reset();
        assert_eq!(m.typed(), "");
        assert_eq!(m.remaining(), "si");
        assert!(!m.is_completed());
    }

    #[test]
    fn points_and_progress() {
        let mut m = shi();
        assert_eq!(m.base_point(), 2);
        assert_eq!(m.point(), 0);
        m.accept('s');
        assert!((m.progress() - 0.5).abs() < f64::EPSILON);
        m.accept('i');
        assert_eq!(m.point(), 2);
    }

    #[test]
    fn display_info_mirrors_state() {
        let mut m = shi();
        m.accept('s');
        let info = m.display_info();
        assert_eq!(info.display_text, "し");
        assert_eq!(info.accepted_text, "s");
        assert_eq!(info.remaining_text, "i");
        assert!(!info.is_completed);
    }

    #[test]
    fn unit_enum_dispatches_to_matcher() {
        let mut u = Unit::plain("か", vec!["ka".into(), "ca".into()]);
        assert!(!u.is_nasal());
        assert!(!u.is_branching());
        assert!(u.accept('c'));
        assert!(u.accept('a'));
        assert!(u.is_completed());
        assert_eq!(u.typed(), "ca");
    }
}
