//! Guided-scrolling session: pacer and cursor positioner wired
//! together behind one transport surface.

use log::debug;

use crate::cursor::{CursorConfig, CursorResponse, CursorTracker, WordLayout};
use crate::pacer::{Pacer, PacerConfig, PacerEvent, PacerState};

/// Combined update surfaced to the guided reading screen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GuidedEvent<'a> {
    /// The active word changed; `cursor` carries the matching
    /// reposition when the word is already measured.
    Word {
        index: usize,
        word: &'a str,
        cursor: Option<CursorResponse>,
    },
    Cursor(CursorResponse),
    Complete { final_wpm: u16 },
}

pub struct GuidedReader<'a> {
    pacer: Pacer<'a>,
    cursor: CursorTracker,
}

impl<'a> GuidedReader<'a> {
    pub fn new(
        words: &'a [&'a str],
        pacer_config: PacerConfig,
        cursor_config: CursorConfig,
    ) -> Self {
        Self {
            pacer: Pacer::new(words, pacer_config),
            cursor: CursorTracker::new(cursor_config),
        }
    }

    pub const fn pacer(&self) -> &Pacer<'a> {
        &self.pacer
    }

    pub const fn state(&self) -> PacerState {
        self.pacer.state()
    }

    pub const fn scroll_offset(&self) -> f32 {
        self.cursor.scroll_offset()
    }

    pub fn start(&mut self, now_ms: u64) -> Option<GuidedEvent<'a>> {
        let event = self.pacer.start(now_ms)?;
        Some(self.lift(event, now_ms))
    }

    pub fn pause(&mut self) {
        self.pacer.pause();
    }

    pub fn resume(&mut self, now_ms: u64) {
        self.pacer.resume(now_ms);
    }

    pub fn toggle_pause(&mut self, now_ms: u64) {
        self.pacer.toggle_pause(now_ms);
    }

    /// Stop playback and re-point the cursor at the first word.
    pub fn reset(&mut self, now_ms: u64) -> Option<GuidedEvent<'a>> {
        self.pacer.reset();
        self.cursor.on_index_change(0, now_ms).map(GuidedEvent::Cursor)
    }

    pub fn speed_up(&mut self, now_ms: u64) {
        self.pacer.speed_up(now_ms);
    }

    pub fn slow_down(&mut self, now_ms: u64) {
        self.pacer.slow_down(now_ms);
    }

    pub fn set_wpm(&mut self, wpm: u16, now_ms: u64) {
        self.pacer.set_wpm(wpm, now_ms);
    }

    pub fn go_to_word(&mut self, index: usize, now_ms: u64) -> Option<GuidedEvent<'a>> {
        let event = self.pacer.go_to_word(index, now_ms)?;
        Some(self.lift(event, now_ms))
    }

    /// View-reported measurement for a rendered word.
    pub fn report_layout(
        &mut self,
        index: usize,
        layout: WordLayout,
    ) -> Option<GuidedEvent<'a>> {
        self.cursor.record_layout(index, layout).map(GuidedEvent::Cursor)
    }

    /// View-reported scroll frame (programmatic or user-driven).
    pub fn report_scroll(&mut self, offset: f32) {
        self.cursor.record_scroll(offset);
    }

    /// User-initiated drag. Manual scrolling always means "read at my
    /// own pace": a playing pacer is paused and resuming stays an
    /// explicit user action.
    pub fn report_manual_scroll_start(&mut self) {
        let state = self.pacer.state();
        if state.playing && !state.paused {
            debug!("guided: manual scroll pauses playback");
            self.pacer.pause();
        }
    }

    pub fn set_cursor_visible(&mut self, visible: bool) -> Option<GuidedEvent<'a>> {
        self.cursor.set_visible(visible).map(GuidedEvent::Cursor)
    }

    /// Evaluate both pending deadlines: word advancement first, then
    /// the layout retry.
    pub fn tick(&mut self, now_ms: u64) -> Option<GuidedEvent<'a>> {
        if let Some(event) = self.pacer.tick(now_ms) {
            return Some(self.lift(event, now_ms));
        }
        self.cursor.tick(now_ms).map(GuidedEvent::Cursor)
    }

    fn lift(&mut self, event: PacerEvent<'a>, now_ms: u64) -> GuidedEvent<'a> {
        match event {
            PacerEvent::WordChange { index, word } => GuidedEvent::Word {
                index,
                word,
                cursor: self.cursor.on_index_change(index, now_ms),
            },
            PacerEvent::Complete { final_wpm } => GuidedEvent::Complete { final_wpm },
        }
    }
}
