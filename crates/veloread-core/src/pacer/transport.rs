impl<'a> Pacer<'a> {
    pub fn new(words: &'a [&'a str], config: PacerConfig) -> Self {
        Self {
            words,
            config,
            current_index: 0,
            playing: false,
            paused: false,
            complete: false,
            timer: SingleShot::idle(),
        }
    }

    pub const fn config(&self) -> &PacerConfig {
        &self.config
    }

    pub const fn state(&self) -> PacerState {
        PacerState {
            current_index: self.current_index,
            wpm: self.config.wpm,
            playing: self.playing,
            paused: self.paused,
            complete: self.complete,
        }
    }

    pub const fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_word(&self) -> Option<&'a str> {
        self.words.get(self.current_index).copied()
    }

    pub const fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Begin playback from the first word. The word-change for index 0
    /// is emitted synchronously; an empty sequence completes immediately
    /// without scheduling a timer.
    pub fn start(&mut self, now_ms: u64) -> Option<PacerEvent<'a>> {
        self.current_index = 0;
        self.paused = false;

        if self.words.is_empty() {
            self.playing = false;
            self.complete = true;
            self.timer.cancel();
            debug!("pacer: start on empty sequence wpm={}", self.config.wpm);
            return Some(PacerEvent::Complete {
                final_wpm: self.config.wpm,
            });
        }

        self.playing = true;
        self.complete = false;
        self.rearm(now_ms);
        Some(PacerEvent::WordChange {
            index: 0,
            word: self.words[0],
        })
    }

    /// Hold the current word. The pending deadline stays armed; a fire
    /// while paused is a no-op and `resume` re-arms from scratch.
    pub fn pause(&mut self) {
        if self.paused {
            return;
        }
        self.paused = true;
        debug!("pacer: paused at index={}", self.current_index);
    }

    pub fn resume(&mut self, now_ms: u64) {
        if !self.paused {
            return;
        }
        self.paused = false;
        if self.playing && !self.complete {
            self.rearm(now_ms);
        }
    }

    pub fn toggle_pause(&mut self, now_ms: u64) {
        if self.paused {
            self.resume(now_ms);
        } else {
            self.pause();
        }
    }

    /// Return to the first word, paused, with no pending timer.
    pub fn reset(&mut self) {
        self.current_index = 0;
        self.complete = false;
        self.paused = true;
        self.playing = false;
        self.timer.cancel();
    }

    pub fn speed_up(&mut self, now_ms: u64) {
        self.apply_wpm(self.config.wpm.saturating_add(self.config.wpm_step), now_ms);
    }

    pub fn slow_down(&mut self, now_ms: u64) {
        self.apply_wpm(self.config.wpm.saturating_sub(self.config.wpm_step), now_ms);
    }

    pub fn set_wpm(&mut self, wpm: u16, now_ms: u64) {
        self.apply_wpm(wpm, now_ms);
    }

    /// Jump to `index` and emit its word-change. Out of range is a
    /// silent no-op.
    pub fn go_to_word(&mut self, index: usize, now_ms: u64) -> Option<PacerEvent<'a>> {
        if index >= self.words.len() {
            return None;
        }

        self.current_index = index;
        self.complete = false;
        if self.playing && !self.paused {
            self.rearm(now_ms);
        }
        Some(PacerEvent::WordChange {
            index,
            word: self.words[index],
        })
    }

    fn apply_wpm(&mut self, requested: u16, now_ms: u64) {
        let next = requested.max(self.config.min_wpm).min(self.config.max_wpm);
        if next == self.config.wpm {
            return;
        }

        debug!("pacer: wpm {} -> {}", self.config.wpm, next);
        self.config.wpm = next;
        if self.playing && !self.paused && !self.complete {
            self.rearm(now_ms);
        }
    }
}
