//! Platform-independent reading pacer and cursor-tracking engine.
//!
//! Three timed display modes share this core:
//!
//! - RSVP: one word at a time at a fixed WPM, split around its optimal
//!   recognition point ([`orp`], driven by [`pacer`]).
//! - Guided scrolling: full text with a cursor gliding under the active
//!   word and auto-scroll keeping it visible ([`cursor`], [`guided`]).
//! - Dual-column saccade: two fixation beats per line ([`saccade`],
//!   lines prepared by [`lines`]).
//!
//! Controllers never sleep. Each owns a single-shot deadline
//! ([`timer::SingleShot`]) and exposes `tick(now_ms)`; the platform loop
//! supplies monotonic milliseconds and reacts to the returned events.
//! Re-arming replaces the deadline, so a controller can never have two
//! advancement timers in flight.

#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod cursor;
pub mod guided;
pub mod lines;
pub mod orp;
pub mod pacer;
pub mod saccade;
pub mod settings;
pub mod timer;

pub(crate) const MS_PER_MINUTE: u32 = 60_000;
