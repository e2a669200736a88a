// Full-session flows for the later weeks, driven through the App shell.

use crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

use riff::games::switch_left::{ROUND_COUNT, STORY_COUNT};
use riff::games::{object_work, ActiveGame, Week};
use riff::sequencer::TICKS_PER_SEC;
use riff::ui::object_arena;
use riff::App;

fn press(app: &mut App, code: KeyCode) {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
}

fn type_str(app: &mut App, s: &str) {
    for c in s.chars() {
        press(app, KeyCode::Char(c));
    }
}

fn ticks(app: &mut App, n: u32) {
    for _ in 0..n {
        app.handle_tick();
    }
}

#[test]
fn week6_dialogue_reaches_conclusion_with_zero_sum_scores() {
    let mut app = App::new(Week::Week6, true).unwrap();
    press(&mut app, KeyCode::Enter);

    for _ in 0..3 {
        press(&mut app, KeyCode::Char('1'));
        ticks(&mut app, 10);
    }

    let ActiveGame::StatusDynamics(game) = &app.game else {
        panic!("week 6 should be mounted");
    };
    assert!(game.is_concluded());
    assert_eq!(game.status.employee + game.status.boss, 0);
    assert_eq!(game.messages.len(), 6);
}

#[test]
fn week7_full_session_collects_twelve_snippets() {
    let mut app = App::new(Week::Week7, true).unwrap();
    press(&mut app, KeyCode::Enter);

    let write_slot = 10 * TICKS_PER_SEC + 4;
    for round in 0..ROUND_COUNT {
        for story in 0..STORY_COUNT {
            type_str(&mut app, &format!("r{round}s{story}"));
            ticks(&mut app, write_slot);
        }
        if round + 1 < ROUND_COUNT {
            ticks(&mut app, 2 * TICKS_PER_SEC);
        }
    }

    let ActiveGame::SwitchLeft(game) = &app.game else {
        panic!("week 7 should be mounted");
    };
    assert_eq!(
        game.stage(),
        riff::games::switch_left::Stage::Summary
    );
    for (s, story) in game.stories.iter().enumerate() {
        for (r, text) in story.rounds.iter().enumerate() {
            assert_eq!(text, &format!("r{r}s{s}"), "story {s} round {r}");
        }
    }
}

#[test]
fn week8_story_survives_rejections() {
    let mut app = App::new(Week::Week8, true).unwrap();
    press(&mut app, KeyCode::Enter);

    // Submit until something sticks; the coin cannot reject forever in
    // any plausible run of this length.
    for i in 0..64 {
        type_str(&mut app, &format!("sentence {i}."));
        press(&mut app, KeyCode::Enter);
        let ActiveGame::NewChoice(game) = &app.game else {
            panic!()
        };
        if !game.sentences.is_empty() {
            break;
        }
    }

    app.handle_key(KeyEvent::new(KeyCode::Char('d'), KeyModifiers::CONTROL));
    let ActiveGame::NewChoice(game) = &app.game else {
        panic!("week 8 should be mounted");
    };
    assert_eq!(game.stage, riff::games::new_choice::Stage::Summary);
    assert!(!game.sentences.is_empty());
    assert!(game.story_lines().len() >= 2);
}

#[test]
fn week3_mouse_drag_translates_through_the_shell() {
    let mut app = App::new(Week::Week3, true).unwrap();
    press(&mut app, KeyCode::Enter);

    let arena = object_arena(Rect::new(0, 0, app.size.0, app.size.1));
    let (ox, oy) = {
        let ActiveGame::ObjectWork(game) = &app.game else {
            panic!()
        };
        (game.object_pos.0 as u16, game.object_pos.1 as u16)
    };

    let mouse = |kind, col: u16, row: u16| MouseEvent {
        kind,
        column: arena.x + col,
        row: arena.y + row,
        modifiers: KeyModifiers::NONE,
    };

    // Grab, fling onto the platform, release. The whole gesture is well
    // under the light object's one second budget.
    app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), ox, oy));
    app.handle_mouse(mouse(
        MouseEventKind::Drag(MouseButton::Left),
        30,
        object_work::PLATFORM_ROW as u16,
    ));
    app.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 30, 2));

    let ActiveGame::ObjectWork(game) = &app.game else {
        panic!("week 3 should be mounted");
    };
    assert_eq!(game.outcome, Some(object_work::Outcome::Success));
}
