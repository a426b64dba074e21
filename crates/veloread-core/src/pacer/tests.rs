use super::*;

const WORDS: [&str; 3] = ["run", "far", "away"];

fn config_120() -> PacerConfig {
    PacerConfig {
        wpm: 120,
        ..PacerConfig::default()
    }
}

#[test]
fn start_emits_first_word_synchronously() {
    let mut pacer = Pacer::new(&WORDS, config_120());

    let event = pacer.start(0);

    assert_eq!(
        event,
        Some(PacerEvent::WordChange {
            index: 0,
            word: "run"
        })
    );
    let state = pacer.state();
    assert!(state.playing);
    assert!(!state.paused);
    assert!(!state.complete);
}

#[test]
fn three_word_timeline_at_120_wpm() {
    // 120 wpm -> 500 ms per word.
    let mut pacer = Pacer::new(&WORDS, config_120());
    pacer.start(0);

    assert_eq!(pacer.tick(499), None);
    assert_eq!(
        pacer.tick(500),
        Some(PacerEvent::WordChange {
            index: 1,
            word: "far"
        })
    );
    assert_eq!(
        pacer.tick(1_000),
        Some(PacerEvent::WordChange {
            index: 2,
            word: "away"
        })
    );
    assert_eq!(
        pacer.tick(1_500),
        Some(PacerEvent::Complete { final_wpm: 120 })
    );
    assert!(pacer.state().complete);
    assert!(!pacer.state().playing);
    // Terminal until reset: nothing keeps firing.
    assert_eq!(pacer.tick(10_000), None);
}

#[test]
fn word_changes_are_strictly_increasing_until_completion() {
    let words: Vec<&str> = "one two three four five".split_whitespace().collect();
    let mut pacer = Pacer::new(&words, config_120());
    pacer.start(0);

    let mut seen = vec![0usize];
    let mut now = 0u64;
    loop {
        now += 500;
        match pacer.tick(now) {
            Some(PacerEvent::WordChange { index, .. }) => seen.push(index),
            Some(PacerEvent::Complete { final_wpm }) => {
                assert_eq!(final_wpm, 120);
                break;
            }
            None => panic!("no event at t={now}"),
        }
    }

    assert_eq!(seen, vec![0, 1, 2, 3, 4]);
}

#[test]
fn empty_sequence_completes_without_scheduling() {
    let words: [&str; 0] = [];
    let mut pacer = Pacer::new(&words, config_120());

    let event = pacer.start(0);

    assert_eq!(event, Some(PacerEvent::Complete { final_wpm: 120 }));
    assert!(pacer.state().complete);
    assert_eq!(pacer.state().current_index, 0);
    assert_eq!(pacer.tick(5_000), None);
}

#[test]
fn paused_fire_is_a_no_op_and_resume_rearms() {
    let mut pacer = Pacer::new(&WORDS, config_120());
    pacer.start(0);
    pacer.pause();

    // Deadline elapses while paused: no advancement.
    assert_eq!(pacer.tick(500), None);
    assert_eq!(pacer.tick(2_000), None);
    assert_eq!(pacer.state().current_index, 0);
    assert!(pacer.state().playing);

    // Resume re-arms from scratch: one full delay from resume time.
    pacer.resume(2_000);
    assert_eq!(pacer.tick(2_400), None);
    assert_eq!(
        pacer.tick(2_500),
        Some(PacerEvent::WordChange {
            index: 1,
            word: "far"
        })
    );
}

#[test]
fn rapid_transport_churn_never_double_advances() {
    let mut pacer = Pacer::new(&WORDS, config_120());
    pacer.start(0);

    pacer.pause();
    pacer.resume(100);
    pacer.toggle_pause(150);
    pacer.toggle_pause(200);
    pacer.set_wpm(120, 250);

    // Last re-arm was at t=200; exactly one advancement fires at 700.
    assert_eq!(pacer.tick(500), None);
    assert_eq!(pacer.tick(600), None);
    assert_eq!(
        pacer.tick(700),
        Some(PacerEvent::WordChange {
            index: 1,
            word: "far"
        })
    );
    assert_eq!(pacer.tick(701), None);
}

#[test]
fn set_wpm_clamps_to_configured_range() {
    let mut pacer = Pacer::new(&WORDS, PacerConfig::default());

    pacer.set_wpm(0, 0);
    assert_eq!(pacer.state().wpm, 80);

    pacer.set_wpm(u16::MAX, 0);
    assert_eq!(pacer.state().wpm, 600);

    pacer.set_wpm(300, 0);
    assert_eq!(pacer.state().wpm, 300);
}

#[test]
fn speed_steps_clamp_at_the_limits() {
    let mut pacer = Pacer::new(
        &WORDS,
        PacerConfig {
            wpm: 595,
            ..PacerConfig::default()
        },
    );

    pacer.speed_up(0);
    assert_eq!(pacer.state().wpm, 600);
    pacer.speed_up(0);
    assert_eq!(pacer.state().wpm, 600);

    for _ in 0..60 {
        pacer.slow_down(0);
    }
    assert_eq!(pacer.state().wpm, 80);
}

#[test]
fn wpm_change_while_playing_rearms_with_the_new_delay() {
    let mut pacer = Pacer::new(&WORDS, config_120());
    pacer.start(0);

    // 300 wpm -> 200 ms, re-armed from t=100.
    pacer.set_wpm(300, 100);
    assert_eq!(pacer.tick(299), None);
    assert_eq!(
        pacer.tick(300),
        Some(PacerEvent::WordChange {
            index: 1,
            word: "far"
        })
    );
}

#[test]
fn go_to_word_jumps_and_emits() {
    let mut pacer = Pacer::new(&WORDS, config_120());
    pacer.start(0);

    let event = pacer.go_to_word(2, 100);

    assert_eq!(
        event,
        Some(PacerEvent::WordChange {
            index: 2,
            word: "away"
        })
    );
    assert_eq!(pacer.tick(600), Some(PacerEvent::Complete { final_wpm: 120 }));
}

#[test]
fn go_to_word_out_of_range_is_a_silent_no_op() {
    let mut pacer = Pacer::new(&WORDS, config_120());
    pacer.start(0);

    assert_eq!(pacer.go_to_word(3, 100), None);
    assert_eq!(pacer.state().current_index, 0);

    // Original schedule untouched.
    assert_eq!(
        pacer.tick(500),
        Some(PacerEvent::WordChange {
            index: 1,
            word: "far"
        })
    );
}

#[test]
fn go_to_word_clears_completion() {
    let mut pacer = Pacer::new(&WORDS, config_120());
    pacer.start(0);
    pacer.tick(500);
    pacer.tick(1_000);
    pacer.tick(1_500);
    assert!(pacer.state().complete);

    pacer.go_to_word(1, 2_000);

    assert!(!pacer.state().complete);
    assert_eq!(pacer.state().current_index, 1);
}

#[test]
fn reset_returns_to_paused_idle() {
    let mut pacer = Pacer::new(&WORDS, config_120());
    pacer.start(0);
    pacer.tick(500);

    pacer.reset();

    let state = pacer.state();
    assert_eq!(state.current_index, 0);
    assert!(state.paused);
    assert!(!state.playing);
    assert!(!state.complete);
    assert_eq!(pacer.tick(10_000), None);
}

#[test]
fn zero_wpm_falls_back_to_the_safety_delay() {
    let mut pacer = Pacer::new(
        &WORDS,
        PacerConfig {
            wpm: 0,
            min_wpm: 0,
            ..PacerConfig::default()
        },
    );
    pacer.start(0);

    assert_eq!(pacer.tick(999), None);
    assert_eq!(
        pacer.tick(1_000),
        Some(PacerEvent::WordChange {
            index: 1,
            word: "far"
        })
    );
}

#[test]
fn sentence_end_adds_the_configured_pause() {
    let words = ["Stop.", "now"];
    let mut pacer = Pacer::new(
        &words,
        PacerConfig {
            wpm: 120,
            dot_pause_ms: 240,
            ..PacerConfig::default()
        },
    );
    pacer.start(0);

    // "Stop." holds for 500 + 240 ms.
    assert_eq!(pacer.tick(739), None);
    assert_eq!(
        pacer.tick(740),
        Some(PacerEvent::WordChange {
            index: 1,
            word: "now"
        })
    );
}

#[test]
fn clause_end_adds_the_comma_pause() {
    let words = ["first,", "second"];
    let mut pacer = Pacer::new(
        &words,
        PacerConfig {
            wpm: 120,
            comma_pause_ms: 100,
            ..PacerConfig::default()
        },
    );
    pacer.start(0);

    assert_eq!(pacer.tick(599), None);
    assert!(pacer.tick(600).is_some());
}
