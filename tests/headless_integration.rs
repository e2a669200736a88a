use std::sync::mpsc;
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use riff::effects::Note;
use riff::games::improv_keys::Stage;
use riff::games::{ActiveGame, Week};
use riff::runtime::{FixedTicker, RiffEvent, Runner, TestEventSource};
use riff::sequencer::{Status, TICKS_PER_SEC};
use riff::App;

// Headless integration using the internal runtime + App without a TTY.

fn key(code: KeyCode) -> RiffEvent {
    RiffEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

/// Pump one event through the app; returns true if the app asked to quit.
fn dispatch(app: &mut App, event: RiffEvent) -> bool {
    match event {
        RiffEvent::Tick => {
            app.handle_tick();
            false
        }
        RiffEvent::Key(k) => app.handle_key(k),
        RiffEvent::Mouse(m) => {
            app.handle_mouse(m);
            false
        }
        RiffEvent::Resize => false,
    }
}

#[test]
fn headless_week1_session_completes_with_confetti() {
    let mut app = App::new(Week::Week1, true).unwrap();

    let (tx, rx) = mpsc::channel();
    let es = TestEventSource::new(rx);
    let runner = Runner::new(es, FixedTicker::new(Duration::from_millis(1)));

    // Start, type one answer, then let the timer run out via Tick
    // timeouts from the runner itself.
    tx.send(key(KeyCode::Enter)).unwrap();
    for c in "cats".chars() {
        tx.send(key(KeyCode::Char(c))).unwrap();
    }

    for _ in 0..(5 * TICKS_PER_SEC + 20) {
        let quit = dispatch(&mut app, runner.step());
        assert!(!quit);
        if let ActiveGame::ThreeThings(g) = &app.game {
            if g.status() == Status::Complete {
                break;
            }
        }
    }

    let ActiveGame::ThreeThings(game) = &app.game else {
        panic!("week 1 should still be mounted");
    };
    assert_eq!(game.status(), Status::Complete);
    assert_eq!(game.things[0], "cats");
    assert!(app.celebration.is_active, "expiry should start confetti");
}

#[test]
fn headless_tab_switch_cancels_running_timer() {
    let mut app = App::new(Week::Week1, true).unwrap();

    app.handle_key(KeyEvent::from(KeyCode::Enter));
    let ActiveGame::ThreeThings(g) = &app.game else {
        panic!()
    };
    assert_eq!(g.status(), Status::Running);

    // Switch away and back: the game is rebuilt from scratch.
    app.handle_key(KeyEvent::from(KeyCode::Tab));
    assert_eq!(app.week, Week::Week2);
    app.handle_key(KeyEvent::from(KeyCode::BackTab));
    assert_eq!(app.week, Week::Week1);

    let ActiveGame::ThreeThings(g) = &app.game else {
        panic!()
    };
    assert_eq!(g.status(), Status::Idle, "old session must not survive");
}

#[test]
fn headless_week2_round_advances_through_runner() {
    let mut app = App::new(Week::Week2, true).unwrap();

    let (tx, rx) = mpsc::channel();
    let es = TestEventSource::new(rx);
    let runner = Runner::new(es, FixedTicker::new(Duration::from_millis(1)));

    tx.send(key(KeyCode::Enter)).unwrap();
    // Drain the memorize phase on runner timeouts, then queue the recall.
    for _ in 0..(3 * TICKS_PER_SEC + 10) {
        dispatch(&mut app, runner.step());
    }
    for c in "1234567890".chars() {
        tx.send(key(KeyCode::Char(c))).unwrap();
    }
    tx.send(key(KeyCode::Enter)).unwrap();
    for _ in 0..20 {
        dispatch(&mut app, runner.step());
    }

    let ActiveGame::Metamorphic(game) = &app.game else {
        panic!("week 2 should still be mounted");
    };
    assert_eq!(game.round(), 2);
    assert_eq!(game.current_number, "1234567890");
}

#[test]
fn headless_week9_session_pulses_through_the_shell() {
    let mut app = App::new(Week::Week9, true).unwrap();

    let (tx, rx) = mpsc::channel();
    let es = TestEventSource::new(rx);
    let runner = Runner::new(es, FixedTicker::new(Duration::from_millis(1)));

    // A practice strike lands on the status line as a tone pulse.
    tx.send(key(KeyCode::Char('a'))).unwrap();
    dispatch(&mut app, runner.step());
    assert!(matches!(app.tone_pulse, Some((Note::A4, _))));

    // It decays back to nothing over the following ticks.
    for _ in 0..5 {
        dispatch(&mut app, runner.step());
    }
    assert!(app.tone_pulse.is_none());

    // Drain the rest of the practice clock; its expiry is the first
    // countdown click.
    for _ in 0..(15 * TICKS_PER_SEC - 5) {
        dispatch(&mut app, runner.step());
    }
    let ActiveGame::ImprovKeys(g) = &app.game else {
        panic!("week 9 should still be mounted");
    };
    assert_eq!(g.stage(), Stage::Countdown);
    assert!(app.metronome_pulse > 0, "click should light the beat cue");

    for _ in 0..4 {
        dispatch(&mut app, runner.step());
    }
    assert_eq!(app.metronome_pulse, 0, "beat cue fades between clicks");

    // Through the countdown, strike one note during the recital.
    for _ in 0..(3 * TICKS_PER_SEC - 4) {
        dispatch(&mut app, runner.step());
    }
    let ActiveGame::ImprovKeys(g) = &app.game else {
        panic!()
    };
    assert_eq!(g.stage(), Stage::Recital);

    tx.send(key(KeyCode::Char('g'))).unwrap();
    dispatch(&mut app, runner.step());
    let ActiveGame::ImprovKeys(g) = &app.game else {
        panic!()
    };
    assert_eq!(g.recorded.len(), 1, "recital strikes are recorded");
    assert_eq!(g.recorded[0].note, Note::E5);

    // Let the recital run out; the loop takes over.
    for _ in 0..(20 * TICKS_PER_SEC) {
        dispatch(&mut app, runner.step());
    }
    let ActiveGame::ImprovKeys(g) = &app.game else {
        panic!()
    };
    assert_eq!(g.stage(), Stage::Playback);
    assert!(app.tone_pulse.is_none(), "recital pulse is long gone");

    // The looped recording replays through the shell as fresh pulses.
    let mut relit = None;
    for _ in 0..600 {
        dispatch(&mut app, runner.step());
        if app.tone_pulse.is_some() {
            relit = app.tone_pulse;
            break;
        }
    }
    assert!(
        matches!(relit, Some((Note::E5, _))),
        "playback should relight the tone cue"
    );
}

#[test]
fn headless_esc_quits_from_any_week() {
    for week in Week::ALL {
        let mut app = App::new(week, false).unwrap();
        assert!(
            dispatch(&mut app, key(KeyCode::Esc)),
            "{week} did not quit on esc"
        );
    }
}

#[test]
fn headless_no_effects_suppresses_confetti() {
    let mut app = App::new(Week::Week1, false).unwrap();
    app.handle_key(KeyEvent::from(KeyCode::Enter));
    for _ in 0..(5 * TICKS_PER_SEC + 5) {
        app.handle_tick();
    }

    let ActiveGame::ThreeThings(g) = &app.game else {
        panic!()
    };
    assert_eq!(g.status(), Status::Complete);
    assert!(!app.celebration.is_active);
}
