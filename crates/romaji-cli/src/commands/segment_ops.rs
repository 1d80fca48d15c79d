use serde::Serialize;

use romaji_engine::{nasal_display_patterns, segment_with, RomajiTable, Unit};

use super::pad;

#[derive(Debug, Serialize)]
pub struct UnitReport {
    pub kana: String,
    pub kind: &'static str,
    pub patterns: Vec<String>,
}

impl From<&Unit> for UnitReport {
    fn from(unit: &Unit) -> Self {
        let kind = match unit {
            Unit::Plain(_) => "plain",
            Unit::Sokuon(_) => "sokuon",
            Unit::Nasal(_) => "nasal",
        };
        Self {
            kana: unit.kana().to_string(),
            kind,
            patterns: unit.patterns().to_vec(),
        }
    }
}

pub fn segment_report(table: &RomajiTable, hiragana: &str) -> Vec<UnitReport> {
    segment_with(table, hiragana)
        .iter()
        .map(UnitReport::from)
        .collect()
}

/// Human-readable listing of the units of a word.
pub fn format_segments(reports: &[UnitReport]) -> String {
    let mut out = String::new();
    for (i, r) in reports.iter().enumerate() {
        out.push_str(&format!(
            "  [{:>2}] {} {:<7} {}\n",
            i,
            pad(&r.kana, 6),
            r.kind,
            r.patterns.join(" | "),
        ));
    }
    let default: String = reports
        .iter()
        .filter_map(|r| r.patterns.first())
        .map(String::as_str)
        .collect();
    out.push_str(&format!("  default: {default}\n"));
    out
}

pub fn nasal_hint(next: Option<&str>) -> String {
    nasal_display_patterns(next).join(" ")
}
