use tracing::{debug, debug_span};

use romaji_core::NasalOutcome;

use super::types::{now_millis, KeyResponse, WordResult};
use super::WordMatcher;

impl WordMatcher {
    /// Feed one keystroke, stamping it with the wall clock.
    pub fn process_key(&mut self, key: char) -> KeyResponse {
        self.process_key_at(key, now_millis())
    }

    /// Feed one keystroke at `now` (milliseconds since the Unix epoch).
    ///
    /// Keys arriving after the word is complete are ignored and not counted.
    pub fn process_key_at(&mut self, key: char, now: u64) -> KeyResponse {
        if self.is_completed() {
            return KeyResponse::ignored(self.index);
        }
        let _span = debug_span!("process_key", index = self.index, key = %key).entered();

        let start_time = *self.start_time.get_or_insert(now);
        self.key_count += 1;

        let accepted = self.apply_key(key);
        if !accepted {
            self.mistake_count += 1;
            debug!(mistakes = self.mistake_count, "mismatch");
        }

        let result = if self.is_completed() {
            let result = WordResult::new(self.key_count, self.mistake_count, start_time, now);
            debug!(key_count = result.key_count, miss = result.miss, "word complete");
            Some(result)
        } else {
            None
        };

        KeyResponse {
            accepted,
            index: self.index,
            display: self.current_display(),
            result,
        }
    }

    /// Apply a key to the unit under the cursor. When a ん resolves as a
    /// single "n", the same key is applied again to the unit that follows.
    fn apply_key(&mut self, key: char) -> bool {
        loop {
            let i = self.index;
            let (head, tail) = self.units.split_at_mut(i + 1);
            let unit = &mut head[i];

            if let Some(nasal) = unit.as_branching_nasal_mut() {
                match nasal.resolve(key, tail.first()) {
                    NasalOutcome::Double => {
                        self.index += 1;
                        return true;
                    }
                    NasalOutcome::Continue => {
                        self.index += 1;
                        continue;
                    }
                    NasalOutcome::Mismatch => return false,
                }
            }

            if !unit.accept(key) {
                return false;
            }
            if unit.is_completed() {
                self.index += 1;
            }
            return true;
        }
    }
}
