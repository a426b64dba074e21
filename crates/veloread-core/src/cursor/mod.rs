//! Layout-tracked cursor positioning for the guided scrolling mode.

use alloc::vec::Vec;

use log::debug;

use crate::timer::SingleShot;

/// How far past the tracked scroll offset the target word may sit
/// before an auto-scroll is issued. Tuned empirically in the source
/// design; do not re-derive.
pub const SCROLL_JUMP_THRESHOLD: f32 = 100.0;
/// Gap kept above the active word after an auto-scroll.
pub const SCROLL_LOOK_AHEAD: f32 = 50.0;
/// Re-measure tolerance on x/y/width below which the cursor stays put.
pub const LAYOUT_TOLERANCE: f32 = 1.0;
/// Delay before retrying a word index the view has not measured yet.
pub const LAYOUT_RETRY_DELAY_MS: u64 = 20;

/// Retry budget for a word that never reports a layout.
const LAYOUT_RETRY_LIMIT: u8 = 25;

/// Measured bounding box of a rendered word, viewport-local.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WordLayout {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Screen position for the cursor glyph.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CursorTarget {
    pub x: f32,
    pub y: f32,
}

/// Geometry decision produced by the positioner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CursorResponse {
    Move(CursorTarget),
    /// Scroll the viewport, then place the cursor computed against the
    /// fresh offset so cursor and scroll land on the same frame.
    ScrollAndMove { scroll_to: f32, target: CursorTarget },
}

/// Fixed offsets of the scroll container the cursor floats inside.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CursorConfig {
    pub left_padding: f32,
    pub top_padding: f32,
    pub cursor_width: f32,
    /// Gap between the bottom edge of the word box and the cursor.
    pub cursor_gap: f32,
}

impl Default for CursorConfig {
    fn default() -> Self {
        Self {
            left_padding: 16.0,
            top_padding: 16.0,
            cursor_width: 24.0,
            cursor_gap: 4.0,
        }
    }
}

/// Registry of measured word boxes driving cursor placement and
/// auto-scroll.
///
/// Entries are upserted as the view re-measures and never deleted;
/// stale boxes for off-screen indices are only read when that index
/// becomes current again, at which point the view has re-reported them.
pub struct CursorTracker {
    config: CursorConfig,
    registry: Vec<Option<WordLayout>>,
    current_index: usize,
    scroll_offset: f32,
    visible: bool,
    retry: SingleShot,
    retry_attempts: u8,
}

impl CursorTracker {
    pub fn new(config: CursorConfig) -> Self {
        Self {
            config,
            registry: Vec::new(),
            current_index: 0,
            scroll_offset: 0.0,
            visible: true,
            retry: SingleShot::idle(),
            retry_attempts: 0,
        }
    }

    pub const fn current_index(&self) -> usize {
        self.current_index
    }

    pub const fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn layout_for(&self, index: usize) -> Option<WordLayout> {
        self.registry.get(index).copied().flatten()
    }

    /// Upsert a measured box. Repositions when the measurement is for
    /// the current word and is new or moved beyond the tolerance.
    pub fn record_layout(&mut self, index: usize, layout: WordLayout) -> Option<CursorResponse> {
        if index >= self.registry.len() {
            self.registry.resize(index + 1, None);
        }
        let previous = self.registry[index];
        self.registry[index] = Some(layout);

        if index != self.current_index {
            return None;
        }

        let moved = match previous {
            None => true,
            Some(prev) => {
                delta(prev.x, layout.x) > LAYOUT_TOLERANCE
                    || delta(prev.y, layout.y) > LAYOUT_TOLERANCE
                    || delta(prev.width, layout.width) > LAYOUT_TOLERANCE
            }
        };
        if !moved || !self.visible {
            return None;
        }

        Some(CursorResponse::Move(
            self.target_for(layout, self.scroll_offset),
        ))
    }

    /// Follow the pacer to a new word. A missing measurement arms a
    /// short retry instead of failing; the view reports it
    /// asynchronously relative to the index change.
    pub fn on_index_change(&mut self, index: usize, now_ms: u64) -> Option<CursorResponse> {
        self.current_index = index;
        self.retry.cancel();
        self.retry_attempts = 0;
        self.respond_for_current(now_ms)
    }

    /// Track the viewport scroll position. Bookkeeping only.
    pub fn record_scroll(&mut self, offset: f32) {
        self.scroll_offset = offset;
    }

    /// Toggle cursor visibility. Layout keeps being recorded while
    /// hidden so re-showing repositions instantly.
    pub fn set_visible(&mut self, visible: bool) -> Option<CursorResponse> {
        self.visible = visible;
        if !visible {
            return None;
        }
        let layout = self.layout_for(self.current_index)?;
        Some(self.decide(layout))
    }

    /// Drive the pending layout retry, if any.
    pub fn tick(&mut self, now_ms: u64) -> Option<CursorResponse> {
        if !self.retry.fire(now_ms) {
            return None;
        }
        self.respond_for_current(now_ms)
    }

    fn respond_for_current(&mut self, now_ms: u64) -> Option<CursorResponse> {
        match self.layout_for(self.current_index) {
            Some(layout) => {
                self.retry_attempts = 0;
                if !self.visible {
                    return None;
                }
                Some(self.decide(layout))
            }
            None => {
                if self.retry_attempts >= LAYOUT_RETRY_LIMIT {
                    debug!(
                        "cursor: giving up on index={} after {} retries",
                        self.current_index, self.retry_attempts
                    );
                    return None;
                }
                self.retry_attempts += 1;
                self.retry.arm(now_ms, LAYOUT_RETRY_DELAY_MS);
                None
            }
        }
    }

    /// Scroll when the target sits more than the jump threshold past
    /// the tracked offset; the cursor is then computed against the new
    /// offset, not the stale one, to avoid a one-frame desync.
    fn decide(&self, layout: WordLayout) -> CursorResponse {
        if layout.y - self.scroll_offset > SCROLL_JUMP_THRESHOLD {
            let scroll_to = (layout.y - SCROLL_LOOK_AHEAD).max(0.0);
            CursorResponse::ScrollAndMove {
                scroll_to,
                target: self.target_for(layout, scroll_to),
            }
        } else {
            CursorResponse::Move(self.target_for(layout, self.scroll_offset))
        }
    }

    fn target_for(&self, layout: WordLayout, scroll_offset: f32) -> CursorTarget {
        CursorTarget {
            x: self.config.left_padding + layout.x + layout.width / 2.0
                - self.config.cursor_width / 2.0,
            y: self.config.top_padding + layout.y - scroll_offset
                + layout.height
                + self.config.cursor_gap,
        }
    }
}

fn delta(a: f32, b: f32) -> f32 {
    if a > b { a - b } else { b - a }
}
