use romaji_core::RomajiTable;

use super::*;

#[test]
fn test_first_key_records_start_time() {
    let mut m = WordMatcher::new("か");
    assert_eq!(m.start_time(), None);
    m.process_key_at('x', 500);
    assert_eq!(m.start_time(), Some(500));
    m.process_key_at('k', 900);
    assert_eq!(m.start_time(), Some(500));
}

#[test]
fn test_every_key_counts() {
    let mut m = WordMatcher::new("かき");
    type_keys(&mut m, "kqa");
    assert_eq!(m.key_count(), 3);
    assert_eq!(m.mistake_count(), 1);
    assert_eq!(m.index(), 1);
}

#[test]
fn test_mismatch_leaves_unit_untouched() {
    let mut m = WordMatcher::new("し");
    m.process_key_at('s', T0);
    let resp = m.process_key_at('k', T0 + 1);
    assert!(!resp.accepted);
    assert_eq!(m.current_unit().unwrap().typed(), "s");
    let display = resp.display.unwrap();
    assert_eq!(display.accepted_text, "s");
    assert_eq!(display.remaining_text, "i");
}

#[test]
fn test_response_tracks_cursor() {
    let mut m = WordMatcher::new("かさ");
    let resps = type_keys(&mut m, "ka");
    assert_eq!(resps[0].index, 0);
    assert_eq!(resps[1].index, 1);
    let display = resps[1].display.as_ref().unwrap();
    assert_eq!(display.display_text, "さ");
    assert_eq!(display.accepted_text, "");
    assert_eq!(display.remaining_text, "sa");
}

#[test]
fn test_completion_emitted_once() {
    let mut m = WordMatcher::new("ねこ");
    let resps = type_keys(&mut m, "neko");
    let results: Vec<_> = resps.iter().filter(|r| r.result.is_some()).collect();
    assert_eq!(results.len(), 1);
    assert!(resps[3].result.is_some());
    assert!(resps[3].display.is_none());
    assert!(m.is_completed());

    let result = resps[3].result.as_ref().unwrap();
    assert_eq!(result.key_count, 4);
    assert_eq!(result.correct, 4);
    assert_eq!(result.miss, 0);
    assert_eq!(result.start_time, T0);
    assert_eq!(result.end_time, T0 + 3 * STEP_MS);
}

#[test]
fn test_keys_after_completion_are_ignored() {
    let mut m = WordMatcher::new("え");
    m.process_key_at('e', T0);
    let resp = m.process_key_at('e', T0 + 10);
    assert!(!resp.accepted);
    assert!(resp.result.is_none());
    assert_eq!(m.key_count(), 1);
    assert_eq!(m.mistake_count(), 0);
}

#[test]
fn test_empty_word_is_already_complete() {
    let mut m = WordMatcher::new("");
    assert!(m.is_completed());
    let resp = m.process_key_at('a', T0);
    assert!(!resp.accepted);
    assert_eq!(m.key_count(), 0);
    assert_eq!(m.progress_percent(), 0);
}

#[test]
fn test_miss_counts_in_result() {
    let result = finish_with("いぬ", "iqnu").unwrap();
    assert_eq!(result.key_count, 4);
    assert_eq!(result.miss, 1);
    assert_eq!(result.correct, 3);
    assert!((result.accuracy - 0.75).abs() < 1e-9);
}

#[test]
fn test_reset_replays_identically() {
    let keys = "syasinnwotoru";
    let mut m = WordMatcher::new("しゃしんをとる");
    type_keys(&mut m, keys);
    assert!(m.is_completed());
    let typed_before: Vec<String> = m.units().iter().map(|u| u.typed().to_string()).collect();

    m.reset();
    assert_eq!(m.index(), 0);
    assert_eq!(m.key_count(), 0);
    assert_eq!(m.mistake_count(), 0);
    assert_eq!(m.start_time(), None);
    assert!(m.units().iter().all(|u| !u.is_completed() && u.typed().is_empty()));

    type_keys(&mut m, keys);
    assert!(m.is_completed());
    let typed_after: Vec<String> = m.units().iter().map(|u| u.typed().to_string()).collect();
    assert_eq!(typed_before, typed_after);
    assert!(m.units().iter().all(|u| u.is_completed()));
}

#[test]
fn test_progress_percent() {
    let mut m = WordMatcher::new("かきくけ");
    assert_eq!(m.progress_percent(), 0);
    type_keys(&mut m, "kaki");
    assert_eq!(m.progress_percent(), 50);
    type_keys(&mut m, "kuke");
    assert_eq!(m.progress_percent(), 100);
}

#[test]
fn test_romaji_lengths() {
    let mut m = WordMatcher::new("しんぶん");
    assert_eq!(m.total_romaji_len(), "sinnbunn".len());
    // The first ん advertises a bare "n" before ぶ, so its shortest rest is one key.
    assert_eq!(m.remaining_romaji_len(), "sinbunn".len());
    type_keys(&mut m, "sh");
    assert_eq!(m.remaining_romaji_len(), "inbunn".len());
}

#[test]
fn test_typed_and_remaining_romaji() {
    let mut m = WordMatcher::new("ちかてつ");
    type_keys(&mut m, "chika");
    assert_eq!(m.typed_romaji(), "chika");
    assert_eq!(m.remaining_romaji(), "tetu");
}

#[test]
fn test_detailed_progress() {
    let mut m = WordMatcher::new("きょうと");
    type_keys(&mut m, "kyo");
    type_keys(&mut m, "u");
    type_keys(&mut m, "t");
    let p = m.detailed_progress();
    assert_eq!(p.current_kana_index, 2);
    assert_eq!(p.current_romaji_index, 1);
    assert_eq!(p.total_kana_count, 3);
    assert_eq!(p.total_romaji_count, "kyouto".len());
    assert_eq!(p.current.unwrap().display_text, "と");
}

#[test]
fn test_points_follow_default_length() {
    let mut m = WordMatcher::new("しか");
    type_keys(&mut m, "shi");
    assert_eq!(m.points(), 2);
    type_keys(&mut m, "ka");
    assert_eq!(m.points(), 4);
}

#[test]
fn test_custom_table() {
    let table = RomajiTable::from_toml("[mappings]\n\"つ\" = [\"tsu\"]\n").unwrap();
    let mut m = WordMatcher::with_table(&table, "つ");
    assert!(m.process_key_at('t', T0).accepted);
    assert!(!m.process_key_at('u', T0).accepted);
    assert!(m.process_key_at('s', T0).accepted);
    assert!(m.process_key_at('u', T0).result.is_some());
}

#[test]
fn test_response_serializes() {
    let mut m = WordMatcher::new("あ");
    let resp = m.process_key_at('a', T0);
    let json = serde_json::to_value(&resp).unwrap();
    assert_eq!(json["accepted"], true);
    assert_eq!(json["index"], 1);
    assert!(json["display"].is_null());
    assert_eq!(json["result"]["key_count"], 1);
}
