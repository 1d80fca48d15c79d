use serde::Serialize;

use romaji_engine::{DisplayInfo, RomajiTable, WordMatcher, WordResult};

#[derive(Debug, Serialize)]
pub struct ReplayStep {
    pub key: char,
    pub accepted: bool,
    pub index: usize,
    pub display: Option<DisplayInfo>,
}

#[derive(Debug, Serialize)]
pub struct ReplayReport {
    pub hiragana: String,
    pub steps: Vec<ReplayStep>,
    pub typed: String,
    pub remaining: String,
    pub result: Option<WordResult>,
}

/// Feed `keys` to a fresh matcher, one every `interval_ms`.
pub fn replay(table: &RomajiTable, hiragana: &str, keys: &str, interval_ms: u64) -> ReplayReport {
    let mut matcher = WordMatcher::with_table(table, hiragana);
    let mut steps = Vec::new();
    let mut result = None;
    for (n, key) in keys.chars().enumerate() {
        let resp = matcher.process_key_at(key, n as u64 * interval_ms);
        if resp.result.is_some() {
            result = resp.result.clone();
        }
        steps.push(ReplayStep {
            key,
            accepted: resp.accepted,
            index: resp.index,
            display: resp.display,
        });
    }
    ReplayReport {
        hiragana: hiragana.to_string(),
        steps,
        typed: matcher.typed_romaji(),
        remaining: matcher.remaining_romaji(),
        result,
    }
}

pub fn format_replay(report: &ReplayReport) -> String {
    let mut out = format!("=== Replay \"{}\" ===\n", report.hiragana);
    for step in &report.steps {
        let mark = if step.accepted { "ok " } else { "MISS" };
        let unit = match &step.display {
            Some(d) => format!(
                "{} [{}|{}]",
                d.display_text, d.accepted_text, d.remaining_text
            ),
            None => "(done)".to_string(),
        };
        out.push_str(&format!(
            "  {:?} {:<4} unit={:<2} {}\n",
            step.key, mark, step.index, unit
        ));
    }
    out.push_str(&format!(
        "  typed: {}  remaining: {}\n",
        report.typed, report.remaining
    ));
    match &report.result {
        Some(r) => out.push_str(&format!(
            "  complete: keys={} miss={} kpm={} accuracy={:.1}%\n",
            r.key_count,
            r.miss,
            r.kpm,
            r.accuracy * 100.0
        )),
        None => out.push_str("  incomplete\n"),
    }
    out
}
