//! Hiragana → [`Unit`] segmentation.

use tracing::{debug, debug_span};

use crate::nasal::{leading_romaji, nasal_display_patterns_with, NasalResolver};
use crate::table::{is_consonant, RomajiTable, NASAL, SOKUON};
use crate::unit::{Unit, UnitMatcher};

const SOKUON_FALLBACK: [&str; 4] = ["xtu", "ltu", "xtsu", "ltsu"];

/// Split a hiragana string into units using the default table.
pub fn segment(hiragana: &str) -> Vec<Unit> {
    segment_with(RomajiTable::global(), hiragana)
}

/// Split a hiragana string into units.
///
/// Every character lands in exactly one unit. Youon clusters are preferred
/// over single kana; characters missing from the table become units whose
/// only pattern is the character itself.
pub fn segment_with(table: &RomajiTable, hiragana: &str) -> Vec<Unit> {
    let chars: Vec<char> = hiragana.chars().collect();
    let _span = debug_span!("segment", char_count = chars.len()).entered();

    let mut units = Vec::with_capacity(chars.len());
    let mut i = 0;
    while i < chars.len() {
        let ch = chars[i];

        if ch == SOKUON {
            let next = cluster_at(table, &chars, i + 1);
            let patterns = sokuon_patterns(table, next.as_deref());
            units.push(Unit::Sokuon(UnitMatcher::new(ch.to_string(), patterns)));
            i += 1;
            continue;
        }

        if ch == NASAL {
            let next = cluster_at(table, &chars, i + 1);
            let patterns = nasal_display_patterns_with(table, next.as_deref());
            units.push(Unit::Nasal(NasalResolver::new(patterns)));
            i += 1;
            continue;
        }

        if i + 1 < chars.len() {
            let pair: String = chars[i..i + 2].iter().collect();
            if let Some(patterns) = table.patterns(&pair) {
                units.push(Unit::plain(pair, patterns.to_vec()));
                i += 2;
                continue;
            }
        }

        let single = ch.to_string();
        let patterns = match table.patterns(&single) {
            Some(p) => p.to_vec(),
            None => {
                debug!(ch = %ch, "unmapped character, typed as itself");
                vec![single.clone()]
            }
        };
        units.push(Unit::plain(single, patterns));
        i += 1;
    }

    debug!(unit_count = units.len());
    units
}

/// The default romanization of a word: each unit's first pattern, joined.
pub fn default_romaji(hiragana: &str) -> String {
    segment(hiragana)
        .iter()
        .filter_map(|u| u.patterns().first())
        .map(String::as_str)
        .collect()
}

/// The cluster starting at `i`, as the segmenter would cut it.
fn cluster_at(table: &RomajiTable, chars: &[char], i: usize) -> Option<String> {
    let first = *chars.get(i)?;
    if first != SOKUON && first != NASAL && i + 1 < chars.len() {
        let pair: String = chars[i..i + 2].iter().collect();
        if table.contains(&pair) {
            return Some(pair);
        }
    }
    Some(first.to_string())
}

/// っ doubles the leading consonant of the next mora, or is spelled out.
fn sokuon_patterns(table: &RomajiTable, next: Option<&str>) -> Vec<String> {
    match next
        .and_then(|cluster| leading_romaji(table, cluster))
        .filter(|&c| is_consonant(c))
    {
        Some(consonant) => vec![consonant.to_string(), "xtu".into(), "ltu".into()],
        None => SOKUON_FALLBACK.iter().map(|s| s.to_string()).collect(),
    }
}
