//! Terminal RSVP player driving the veloread-core pacing engine.
//!
//! The loop mirrors the intended platform integration: a driver
//! produces monotonic milliseconds, calls `tick`, and reacts to the
//! returned events. Here the reactions are ANSI redraws of the current
//! word with its ORP letter pinned to a fixed column.

use std::io::{self, Write};
use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;
use log::debug;
use veloread_core::orp::orp_split;
use veloread_core::pacer::{Pacer, PacerConfig, PacerEvent};
use veloread_core::settings::{MemorySettingsStore, ReaderSettings, SettingsStore};

const TICK_INTERVAL: Duration = Duration::from_millis(5);
/// Terminal column the ORP letter is anchored at.
const ORP_COLUMN: usize = 24;

#[derive(Parser)]
#[command(name = "veloread")]
#[command(about = "A terminal RSVP speed reader")]
struct Cli {
    /// Plain-text file to pace through.
    text_file: std::path::PathBuf,

    /// Pace in words per minute.
    #[arg(long, default_value_t = 230)]
    wpm: u16,

    /// Word index to start from.
    #[arg(long, default_value_t = 0)]
    start_at: usize,

    /// Extra hold after sentence-ending words, in milliseconds.
    #[arg(long, default_value_t = 240)]
    dot_pause_ms: u16,

    /// Extra hold after clause-ending words, in milliseconds.
    #[arg(long, default_value_t = 240)]
    comma_pause_ms: u16,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let text = std::fs::read_to_string(&cli.text_file)?;
    let words: Vec<&str> = text.split_whitespace().collect();

    let mut store = MemorySettingsStore::default();
    let settings = store.load()?.unwrap_or(ReaderSettings::new(cli.wpm, true));

    let config = PacerConfig {
        wpm: settings.wpm,
        autostart: settings.autostart,
        dot_pause_ms: cli.dot_pause_ms,
        comma_pause_ms: cli.comma_pause_ms,
        ..PacerConfig::default()
    };
    debug!("player: words={} wpm={}", words.len(), config.wpm);

    let started = Instant::now();
    let mut pacer = Pacer::new(&words, config);

    if config.autostart {
        handle(pacer.start(0));
    }
    if cli.start_at > 0 {
        handle(pacer.go_to_word(cli.start_at, now_ms(started)));
    }

    while !pacer.state().complete {
        thread::sleep(TICK_INTERVAL);
        handle(pacer.tick(now_ms(started)));
    }

    store.save(&ReaderSettings::new(pacer.state().wpm, true))?;
    Ok(())
}

fn now_ms(started: Instant) -> u64 {
    started.elapsed().as_millis() as u64
}

fn handle(event: Option<PacerEvent<'_>>) {
    match event {
        Some(PacerEvent::WordChange { word, .. }) => draw_word(word),
        Some(PacerEvent::Complete { final_wpm }) => {
            println!();
            println!("done ({final_wpm} wpm)");
        }
        None => {}
    }
}

/// Redraw the current word with the ORP letter highlighted and anchored
/// at a fixed column, so the eye never travels between words.
fn draw_word(word: &str) {
    let split = orp_split(word);
    print!(
        "\r\x1b[2K{:>width$}\x1b[1;31m{}\x1b[0m{}",
        split.before,
        split.focus,
        split.after,
        width = ORP_COLUMN
    );
    let _ = io::stdout().flush();
}
