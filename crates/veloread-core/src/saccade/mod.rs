//! Two-fixation-per-line rhythm for dual-column reading.

use log::debug;

use crate::MS_PER_MINUTE;
use crate::timer::SingleShot;

/// Words assumed consumed per fixation stop.
pub const WORDS_PER_FIXATION: u16 = 3;
/// Scroll look-ahead above the freshly advanced line, in layout units.
/// Tuned empirically in the source design; do not re-derive.
pub const SCROLL_LOOK_AHEAD: f32 = 8.0;
/// Fixation emphasis at the start of a beat.
pub const EMPHASIS_PEAK: f32 = 1.0;
/// Resting emphasis: the level a decayed or inactive fixation point
/// sits at.
pub const EMPHASIS_REST: f32 = 0.3;

/// Beat duration used when the configured WPM is zero.
const FALLBACK_FIXATION_MS: u32 = 1_000;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FixationColumn {
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SaccadeConfig {
    pub wpm: u16,
    pub min_wpm: u16,
    pub max_wpm: u16,
    pub wpm_step: u16,
    /// Rendered height of one line, in layout units.
    pub line_height: f32,
}

impl Default for SaccadeConfig {
    fn default() -> Self {
        Self {
            wpm: 230,
            min_wpm: 80,
            max_wpm: 600,
            wpm_step: 10,
            line_height: 24.0,
        }
    }
}

/// Copyable snapshot of the rhythm state.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SaccadeState {
    pub current_line: usize,
    pub active_column: FixationColumn,
    pub playing: bool,
    pub complete: bool,
}

/// Event produced by an elapsed beat.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SaccadeEvent {
    /// Gaze flipped to the right fixation point of the current line.
    Fixation { line: usize, column: FixationColumn },
    /// Advanced to the next line, left fixation point active again.
    LineAdvance {
        line: usize,
        /// `(line + 1) / total * 100`.
        progress_percent: f32,
        /// Viewport offset keeping the new line visible, clamped to >= 0.
        scroll_to: f32,
    },
    Complete,
}

/// Alternating left/right fixation beats advancing a line index.
///
/// `active_column` alternates strictly Left -> Right -> (line+1, Left)
/// and `current_line` only ever grows until the line count is reached.
pub struct Saccade {
    config: SaccadeConfig,
    line_count: usize,
    current_line: usize,
    active_column: FixationColumn,
    playing: bool,
    complete: bool,
    beat_started_ms: u64,
    timer: SingleShot,
}

impl Saccade {
    pub fn new(line_count: usize, config: SaccadeConfig) -> Self {
        Self {
            config,
            line_count,
            current_line: 0,
            active_column: FixationColumn::Left,
            playing: false,
            complete: false,
            beat_started_ms: 0,
            timer: SingleShot::idle(),
        }
    }

    pub const fn config(&self) -> &SaccadeConfig {
        &self.config
    }

    pub const fn state(&self) -> SaccadeState {
        SaccadeState {
            current_line: self.current_line,
            active_column: self.active_column,
            playing: self.playing,
            complete: self.complete,
        }
    }

    pub const fn line_count(&self) -> usize {
        self.line_count
    }

    /// Replace the line list after a re-segmentation (width or source
    /// text changed). Playback stops and the rhythm returns to the top.
    pub fn set_line_count(&mut self, line_count: usize) {
        self.line_count = line_count;
        self.current_line = 0;
        self.active_column = FixationColumn::Left;
        self.complete = false;
        self.playing = false;
        self.timer.cancel();
    }

    /// Begin the rhythm at the first line's left fixation point. An
    /// empty line list completes immediately without scheduling.
    pub fn start(&mut self, now_ms: u64) -> Option<SaccadeEvent> {
        self.current_line = 0;
        self.active_column = FixationColumn::Left;

        if self.line_count == 0 {
            self.playing = false;
            self.complete = true;
            self.timer.cancel();
            debug!("saccade: start on empty line list");
            return Some(SaccadeEvent::Complete);
        }

        self.playing = true;
        self.complete = false;
        self.beat_started_ms = now_ms;
        self.timer.arm(now_ms, self.fixation_duration_ms() as u64);
        None
    }

    /// Cancel the pending beat. `emphasis` reports the resting level
    /// for both columns while stopped.
    pub fn stop(&mut self) {
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

    /// Evaluate the pending beat deadline against `now_ms`.
    pub fn tick(&mut self, now_ms: u64) -> Option<SaccadeEvent> {
        if !self.playing {
            return None;
        }
        if !self.timer.fire(now_ms) {
            return None;
        }

        match self.active_column {
            FixationColumn::Left => {
                self.active_column = FixationColumn::Right;
                self.begin_beat(now_ms);
                Some(SaccadeEvent::Fixation {
                    line: self.current_line,
                    column: FixationColumn::Right,
                })
            }
            FixationColumn::Right => {
                let next = self.current_line + 1;
                if next >= self.line_count {
                    self.playing = false;
                    self.complete = true;
                    self.timer.cancel();
                    debug!("saccade: complete lines={}", self.line_count);
                    return Some(SaccadeEvent::Complete);
                }

                self.current_line = next;
                self.active_column = FixationColumn::Left;
                self.begin_beat(now_ms);

                let progress_percent = (next + 1) as f32 / self.line_count as f32 * 100.0;
                let scroll_to =
                    (next as f32 * self.config.line_height - SCROLL_LOOK_AHEAD).max(0.0);
                Some(SaccadeEvent::LineAdvance {
                    line: next,
                    progress_percent,
                    scroll_to,
                })
            }
        }
    }

    /// Emphasis level for a fixation point at `now_ms`. The active
    /// column starts each beat at the peak and settles linearly to the
    /// resting level across the fixation duration; everything else
    /// rests.
    pub fn emphasis(&self, column: FixationColumn, now_ms: u64) -> f32 {
        if !self.playing || column != self.active_column {
            return EMPHASIS_REST;
        }

        let duration = self.fixation_duration_ms().max(1) as u64;
        let elapsed = now_ms.saturating_sub(self.beat_started_ms);
        if elapsed >= duration {
            return EMPHASIS_REST;
        }

        let progress = elapsed as f32 / duration as f32;
        EMPHASIS_PEAK - (EMPHASIS_PEAK - EMPHASIS_REST) * progress
    }

    fn apply_wpm(&mut self, requested: u16, now_ms: u64) {
        let next = requested.max(self.config.min_wpm).min(self.config.max_wpm);
        if next == self.config.wpm {
            return;
        }

        debug!("saccade: wpm {} -> {}", self.config.wpm, next);
        self.config.wpm = next;
        if self.playing {
            self.begin_beat(now_ms);
        }
    }

    fn begin_beat(&mut self, now_ms: u64) {
        self.beat_started_ms = now_ms;
        self.timer.arm(now_ms, self.fixation_duration_ms() as u64);
    }

    /// `60000 / (wpm / words_per_fixation) / 2`, the duration of one of
    /// the two fixation sub-beats per line.
    fn fixation_duration_ms(&self) -> u32 {
        if self.config.wpm == 0 {
            return FALLBACK_FIXATION_MS;
        }
        MS_PER_MINUTE * WORDS_PER_FIXATION as u32 / self.config.wpm as u32 / 2
    }
}
