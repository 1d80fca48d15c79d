use std::time::{SystemTime, UNIX_EPOCH};

use serde::Serialize;

use romaji_core::DisplayInfo;

/// Milliseconds since the Unix epoch.
pub fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}

/// Response to a single keystroke, consumed by rendering, audio and scoring.
#[derive(Debug, Clone, Serialize)]
pub struct KeyResponse {
    /// Whether the key extended a valid romanization.
    pub accepted: bool,
    /// Cursor position after the key.
    pub index: usize,
    /// The unit under the cursor, `None` once the word is done.
    pub display: Option<DisplayInfo>,
    /// Set exactly once, on the key that completes the word.
    pub result: Option<WordResult>,
}

impl KeyResponse {
    pub(crate) fn ignored(index: usize) -> Self {
        Self {
            accepted: false,
            index,
            display: None,
            result: None,
        }
    }
}

/// Per-word completion record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WordResult {
    pub key_count: u32,
    pub correct: u32,
    pub miss: u32,
    pub start_time: u64,
    pub end_time: u64,
    /// Seconds.
    pub duration: f64,
    /// Keys per minute.
    pub kpm: u32,
    pub accuracy: f64,
}

impl WordResult {
    pub fn new(key_count: u32, miss: u32, start_time: u64, end_time: u64) -> Self {
        let correct = key_count.saturating_sub(miss);
        let duration = end_time.saturating_sub(start_time) as f64 / 1000.0;
        let kpm = if duration > 0.0 {
            (key_count as f64 / duration * 60.0).round() as u32
        } else {
            0
        };
        let accuracy = if key_count > 0 {
            correct as f64 / key_count as f64
        } else {
            1.0
        };
        Self {
            key_count,
            correct,
            miss,
            start_time,
            end_time,
            duration,
            kpm,
            accuracy,
        }
    }
}

/// Snapshot of how far the typist is through a word.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailedProgress {
    pub current_kana_index: usize,
    pub current_romaji_index: usize,
    pub total_kana_count: usize,
    pub total_romaji_count: usize,
    pub current: Option<DisplayInfo>,
}
