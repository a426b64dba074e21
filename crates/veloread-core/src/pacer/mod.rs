//! RSVP pacing state machine: word index, play/pause, WPM and the
//! single-shot advancement timer.

use log::debug;

use crate::MS_PER_MINUTE;
use crate::timer::SingleShot;

/// Advancement delay used when the configured WPM is zero.
const FALLBACK_DELAY_MS: u32 = 1_000;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PacerConfig {
    pub wpm: u16,
    pub min_wpm: u16,
    pub max_wpm: u16,
    pub wpm_step: u16,
    /// Begin playback as soon as the owning screen mounts.
    pub autostart: bool,
    /// Extra hold after sentence-ending words. Zero disables.
    pub dot_pause_ms: u16,
    /// Extra hold after clause-ending words. Zero disables.
    pub comma_pause_ms: u16,
}

impl Default for PacerConfig {
    fn default() -> Self {
        Self {
            wpm: 230,
            min_wpm: 80,
            max_wpm: 600,
            wpm_step: 10,
            autostart: false,
            dot_pause_ms: 0,
            comma_pause_ms: 0,
        }
    }
}

/// Copyable snapshot of the transport state.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PacerState {
    pub current_index: usize,
    pub wpm: u16,
    pub playing: bool,
    pub paused: bool,
    pub complete: bool,
}

/// Event produced by a transport operation or an elapsed tick.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PacerEvent<'a> {
    WordChange { index: usize, word: &'a str },
    Complete { final_wpm: u16 },
}

/// Timed word-by-word progression over a borrowed word sequence.
///
/// The word list is owned by the caller and never mutated here. All
/// operations are total: out-of-range jumps are silent no-ops and
/// invalid rates clamp instead of failing.
pub struct Pacer<'a> {
    words: &'a [&'a str],
    config: PacerConfig,
    current_index: usize,
    playing: bool,
    paused: bool,
    complete: bool,
    timer: SingleShot,
}

include!("transport.rs");
include!("runtime.rs");

#[cfg(test)]
mod tests;
