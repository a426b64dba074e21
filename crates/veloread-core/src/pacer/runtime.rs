impl<'a> Pacer<'a> {
    /// Evaluate the pending deadline against `now_ms`.
    ///
    /// While paused the armed deadline is left untouched so the timer
    /// identity survives pause/resume cycles; advancement only happens
    /// in the playing, unpaused, incomplete state.
    pub fn tick(&mut self, now_ms: u64) -> Option<PacerEvent<'a>> {
        if !self.playing || self.paused || self.complete {
            return None;
        }
        if !self.timer.fire(now_ms) {
            return None;
        }

        if self.current_index + 1 < self.words.len() {
            self.current_index += 1;
            self.rearm(now_ms);
            Some(PacerEvent::WordChange {
                index: self.current_index,
                word: self.words[self.current_index],
            })
        } else {
            self.complete = true;
            self.playing = false;
            self.timer.cancel();
            debug!(
                "pacer: complete index={} wpm={}",
                self.current_index, self.config.wpm
            );
            Some(PacerEvent::Complete {
                final_wpm: self.config.wpm,
            })
        }
    }

    fn rearm(&mut self, now_ms: u64) {
        self.timer.arm(now_ms, self.word_delay_ms() as u64);
    }

    /// Hold time for the word at the current index.
    fn word_delay_ms(&self) -> u32 {
        let base = if self.config.wpm == 0 {
            FALLBACK_DELAY_MS
        } else {
            MS_PER_MINUTE / self.config.wpm as u32
        };

        let word = self.current_word().unwrap_or("");
        let punctuation = if ends_sentence(word) {
            self.config.dot_pause_ms as u32
        } else if ends_clause(word) {
            self.config.comma_pause_ms as u32
        } else {
            0
        };

        base + punctuation
    }
}

fn ends_sentence(word: &str) -> bool {
    matches!(word.chars().next_back(), Some('.' | '!' | '?' | '…'))
}

fn ends_clause(word: &str) -> bool {
    matches!(word.chars().next_back(), Some(',' | ';' | ':'))
}
