use crate::effects::Effects;
use crate::error::RiffError;
use crate::sequencer::{secs, Phase, Sequencer, Status};
use crossterm::event::{KeyCode, KeyEvent};

/// Billed to the player as a long sit; the actual window is short.
const VIGIL_SECS: u32 = 5;

/// Cursor blink period in ticks (roughly half a second each way).
const BLINK_TICKS: u32 = 5;

/// Week 4: one timed sitting with a blank page. Whatever gets typed is
/// the performance; nothing is judged and nothing is saved.
#[derive(Debug)]
pub struct Vigil {
    seq: Sequencer,
    pub text: String,
    pub cursor_visible: bool,
    blink_counter: u32,
}

impl Vigil {
    pub fn new() -> Result<Self, RiffError> {
        Ok(Self {
            seq: Sequencer::new(vec![Phase::timed("vigil", secs(VIGIL_SECS))])?,
            text: String::new(),
            cursor_visible: true,
            blink_counter: 0,
        })
    }

    pub fn status(&self) -> Status {
        self.seq.status()
    }

    pub fn remaining_secs(&self) -> u32 {
        self.seq.remaining_secs()
    }

    pub fn on_tick(&mut self, _fx: &mut dyn Effects) {
        self.seq.tick();
        self.blink_counter += 1;
        if self.blink_counter >= BLINK_TICKS {
            self.blink_counter = 0;
            self.cursor_visible = !self.cursor_visible;
        }
    }

    pub fn on_key(&mut self, key: KeyEvent, _fx: &mut dyn Effects) {
        match self.seq.status() {
            Status::Idle => {
                if key.code == KeyCode::Enter {
                    self.seq.start();
                }
            }
            Status::Running => match key.code {
                KeyCode::Char(c) => self.text.push(c),
                KeyCode::Enter => self.text.push('\n'),
                KeyCode::Backspace => {
                    self.text.pop();
                }
                _ => {}
            },
            Status::Complete => {
                if matches!(key.code, KeyCode::Enter | KeyCode::Char('r')) {
                    self.seq.reset();
                    self.text.clear();
                }
            }
            Status::AwaitingInput => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::NoEffects;
    use crate::sequencer::TICKS_PER_SEC;

    #[test]
    fn test_enter_starts_the_sitting() {
        let mut game = Vigil::new().unwrap();
        let mut fx = NoEffects;
        assert_eq!(game.status(), Status::Idle);
        game.on_key(KeyEvent::from(KeyCode::Enter), &mut fx);
        assert_eq!(game.status(), Status::Running);
        assert_eq!(game.remaining_secs(), VIGIL_SECS);
    }

    #[test]
    fn test_typing_only_counts_while_running() {
        let mut game = Vigil::new().unwrap();
        let mut fx = NoEffects;

        game.on_key(KeyEvent::from(KeyCode::Char('x')), &mut fx);
        assert!(game.text.is_empty(), "no typing before start");

        game.on_key(KeyEvent::from(KeyCode::Enter), &mut fx);
        for c in "sit".chars() {
            game.on_key(KeyEvent::from(KeyCode::Char(c)), &mut fx);
        }
        game.on_key(KeyEvent::from(KeyCode::Enter), &mut fx);
        game.on_key(KeyEvent::from(KeyCode::Char('.')), &mut fx);
        assert_eq!(game.text, "sit\n.");

        for _ in 0..VIGIL_SECS * TICKS_PER_SEC {
            game.on_tick(&mut fx);
        }
        assert_eq!(game.status(), Status::Complete);
        game.on_key(KeyEvent::from(KeyCode::Char('x')), &mut fx);
        assert_eq!(game.text, "sit\n.", "no typing after the bell");
    }

    #[test]
    fn test_cursor_blinks() {
        let mut game = Vigil::new().unwrap();
        let mut fx = NoEffects;
        let before = game.cursor_visible;
        for _ in 0..BLINK_TICKS {
            game.on_tick(&mut fx);
        }
        assert_ne!(game.cursor_visible, before);
    }

    #[test]
    fn test_replay_clears_the_page() {
        let mut game = Vigil::new().unwrap();
        let mut fx = NoEffects;
        game.on_key(KeyEvent::from(KeyCode::Enter), &mut fx);
        game.on_key(KeyEvent::from(KeyCode::Char('a')), &mut fx);
        for _ in 0..VIGIL_SECS * TICKS_PER_SEC {
            game.on_tick(&mut fx);
        }

        game.on_key(KeyEvent::from(KeyCode::Char('r')), &mut fx);
        assert_eq!(game.status(), Status::Idle);
        assert!(game.text.is_empty());
    }
}
