use crate::effects::Effects;
use crate::error::RiffError;
use crate::pool::{ContentPool, Sampler};
use crate::sequencer::{secs, Phase, Sequencer, Status};
use crossterm::event::{KeyCode, KeyEvent};
use rand::Rng;

pub const SLOT_COUNT: usize = 3;
const ENTRY_SECS: u32 = 5;
const MAX_ENTRY_LEN: usize = 60;

/// Week 1: name three things in a surprise category before the five
/// second timer runs out, then celebrate no matter what.
#[derive(Debug)]
pub struct ThreeThings {
    pool: ContentPool,
    sampler: Sampler,
    seq: Sequencer,
    pub category: Option<String>,
    pub things: [String; SLOT_COUNT],
    pub focus: usize,
}

impl ThreeThings {
    pub fn new() -> Result<Self, RiffError> {
        let pool = ContentPool::load("categories.json")?;
        let sampler = Sampler::new("categories", pool.len());
        let seq = Sequencer::new(vec![Phase::timed("entry", secs(ENTRY_SECS))])?;
        Ok(Self {
            pool,
            sampler,
            seq,
            category: None,
            things: Default::default(),
            focus: 0,
        })
    }

    pub fn status(&self) -> Status {
        self.seq.status()
    }

    pub fn remaining_secs(&self) -> u32 {
        self.seq.remaining_secs()
    }

    /// Draw a fresh category and start the entry countdown. Each session
    /// is its own selection run, so replays can land on any category.
    pub fn begin<R: Rng>(&mut self, rng: &mut R) -> Result<(), RiffError> {
        self.sampler.reset(self.pool.len());
        let idx = self.sampler.draw(rng)?;
        self.category = Some(self.pool.entries[idx].clone());
        self.things = Default::default();
        self.focus = 0;
        self.seq.reset();
        self.seq.start();
        Ok(())
    }

    pub fn on_tick(&mut self, fx: &mut dyn Effects) {
        if self.seq.tick().is_some() {
            // Time's up: the moment itself is the win.
            fx.celebrate();
        }
    }

    pub fn on_key(&mut self, key: KeyEvent, _fx: &mut dyn Effects) {
        match self.seq.status() {
            Status::Idle => {
                if key.code == KeyCode::Enter {
                    let mut rng = rand::thread_rng();
                    let _ = self.begin(&mut rng);
                }
            }
            Status::Running => match key.code {
                KeyCode::Char(c) => {
                    let slot = &mut self.things[self.focus];
                    if slot.len() < MAX_ENTRY_LEN {
                        slot.push(c);
                    }
                }
                KeyCode::Backspace => {
                    self.things[self.focus].pop();
                }
                KeyCode::Enter | KeyCode::Down => {
                    if self.focus + 1 < SLOT_COUNT {
                        self.focus += 1;
                    }
                }
                KeyCode::Up => {
                    self.focus = self.focus.saturating_sub(1);
                }
                _ => {}
            },
            Status::Complete => {
                if matches!(key.code, KeyCode::Enter | KeyCode::Char('r')) {
                    let mut rng = rand::thread_rng();
                    let _ = self.begin(&mut rng);
                }
            }
            Status::AwaitingInput => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::RecordingEffects;
    use crate::sequencer::TICKS_PER_SEC;

    #[test]
    fn test_begin_draws_a_category() {
        let mut game = ThreeThings::new().unwrap();
        assert!(game.category.is_none());

        let mut rng = rand::thread_rng();
        game.begin(&mut rng).unwrap();
        let category = game.category.clone().unwrap();
        assert!(game.pool.entries.contains(&category));
        assert_eq!(game.status(), Status::Running);
        assert_eq!(game.remaining_secs(), ENTRY_SECS);
    }

    #[test]
    fn test_expiry_fires_celebration_once() {
        let mut game = ThreeThings::new().unwrap();
        let mut rng = rand::thread_rng();
        game.begin(&mut rng).unwrap();

        let mut fx = RecordingEffects::default();
        for _ in 0..ENTRY_SECS * TICKS_PER_SEC {
            game.on_tick(&mut fx);
        }
        assert_eq!(fx.celebrations, 1);
        assert_eq!(game.status(), Status::Complete);

        // Further ticks do nothing
        game.on_tick(&mut fx);
        assert_eq!(fx.celebrations, 1);
    }

    #[test]
    fn test_typing_fills_focused_slot() {
        let mut game = ThreeThings::new().unwrap();
        let mut rng = rand::thread_rng();
        game.begin(&mut rng).unwrap();

        let mut fx = RecordingEffects::default();
        for c in "apple".chars() {
            game.on_key(KeyEvent::from(KeyCode::Char(c)), &mut fx);
        }
        game.on_key(KeyEvent::from(KeyCode::Enter), &mut fx);
        for c in "pear".chars() {
            game.on_key(KeyEvent::from(KeyCode::Char(c)), &mut fx);
        }

        assert_eq!(game.things[0], "apple");
        assert_eq!(game.things[1], "pear");
        assert_eq!(game.things[2], "");
    }

    #[test]
    fn test_replay_discards_previous_session() {
        let mut game = ThreeThings::new().unwrap();
        let mut rng = rand::thread_rng();
        game.begin(&mut rng).unwrap();

        let mut fx = RecordingEffects::default();
        game.on_key(KeyEvent::from(KeyCode::Char('x')), &mut fx);
        for _ in 0..ENTRY_SECS * TICKS_PER_SEC {
            game.on_tick(&mut fx);
        }
        assert_eq!(game.status(), Status::Complete);

        game.on_key(KeyEvent::from(KeyCode::Char('r')), &mut fx);
        assert_eq!(game.status(), Status::Running);
        assert_eq!(game.things, <[String; SLOT_COUNT]>::default());
        assert_eq!(game.focus, 0);
    }
}
