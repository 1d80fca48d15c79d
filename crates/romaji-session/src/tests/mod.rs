mod basic;

use super::{KeyResponse, WordMatcher};

pub(super) const T0: u64 = 1_000_000;
pub(super) const STEP_MS: u64 = 100;

// Helper: type a string one key at a time, STEP_MS apart starting at T0.
pub(super) fn type_keys(matcher: &mut WordMatcher, keys: &str) -> Vec<KeyResponse> {
    keys.chars()
        .enumerate()
        .map(|(n, ch)| matcher.process_key_at(ch, T0 + n as u64 * STEP_MS))
        .collect()
}

// Helper: type a string and return the completion record, if any key produced one.
pub(super) fn finish_with(hiragana: &str, keys: &str) -> Option<super::WordResult> {
    let mut matcher = WordMatcher::new(hiragana);
    type_keys(&mut matcher, keys)
        .into_iter()
        .find_map(|resp| resp.result)
}
