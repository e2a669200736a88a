use crate::effects::Effects;
use crate::error::RiffError;
use crate::sequencer::{secs, Phase, Sequencer, Status};
use crossterm::event::{KeyCode, KeyEvent};
use rand::Rng;

pub const NUMBER_LEN: usize = 10;
pub const ROUNDS: usize = 5;
const DISPLAY_SECS: u32 = 3;

fn round_phases() -> Vec<Phase> {
    let mut phases = Vec::with_capacity(ROUNDS * 2);
    for _ in 0..ROUNDS {
        phases.push(Phase::timed("memorize", secs(DISPLAY_SECS)));
        phases.push(Phase::gated("recall"));
    }
    phases
}

/// Week 2: memorize a ten digit number, type it back from memory, and
/// your answer (right or wrong) becomes the next number to memorize.
#[derive(Debug)]
pub struct Metamorphic {
    seq: Sequencer,
    pub current_number: String,
    pub history: Vec<String>,
    pub input: String,
    pub error: Option<String>,
}

impl Metamorphic {
    pub fn new() -> Result<Self, RiffError> {
        Ok(Self {
            seq: Sequencer::new(round_phases())?,
            current_number: String::new(),
            history: Vec::new(),
            input: String::new(),
            error: None,
        })
    }

    pub fn status(&self) -> Status {
        self.seq.status()
    }

    pub fn remaining_secs(&self) -> u32 {
        self.seq.remaining_secs()
    }

    /// 1-based round number for display.
    pub fn round(&self) -> usize {
        (self.seq.phase_index() / 2 + 1).min(ROUNDS)
    }

    pub fn is_memorizing(&self) -> bool {
        self.seq.is_running()
    }

    pub fn is_recalling(&self) -> bool {
        self.seq.status() == Status::AwaitingInput
    }

    pub fn begin<R: Rng>(&mut self, rng: &mut R) {
        self.current_number = random_number(rng);
        self.history = vec![self.current_number.clone()];
        self.input.clear();
        self.error = None;
        self.seq.reset();
        self.seq.start();
    }

    pub fn on_tick(&mut self, _fx: &mut dyn Effects) {
        self.seq.tick();
    }

    pub fn on_key(&mut self, key: KeyEvent, _fx: &mut dyn Effects) {
        match self.seq.status() {
            Status::Idle => {
                if key.code == KeyCode::Enter {
                    let mut rng = rand::thread_rng();
                    self.begin(&mut rng);
                }
            }
            Status::AwaitingInput => match key.code {
                // Non-digits are dropped at the boundary rather than
                // stored and rejected later.
                KeyCode::Char(c) if c.is_ascii_digit() => {
                    if self.input.len() < NUMBER_LEN {
                        self.input.push(c);
                        self.error = None;
                    }
                }
                KeyCode::Backspace => {
                    self.input.pop();
                    self.error = None;
                }
                KeyCode::Enter => self.submit(),
                _ => {}
            },
            Status::Complete => {
                if matches!(key.code, KeyCode::Enter | KeyCode::Char('r')) {
                    self.seq.reset();
                    self.current_number.clear();
                    self.history.clear();
                    self.input.clear();
                    self.error = None;
                }
            }
            Status::Running => {}
        }
    }

    /// Whatever was typed becomes the truth for the next round; there is
    /// no right answer, only the next number.
    fn submit(&mut self) {
        if self.input.len() != NUMBER_LEN {
            self.error = Some(format!(
                "need exactly {NUMBER_LEN} digits, got {}",
                self.input.len()
            ));
            return;
        }
        self.current_number = self.input.clone();
        self.history.push(self.input.clone());
        self.input.clear();
        self.seq.advance_phase();
    }
}

fn random_number<R: Rng>(rng: &mut R) -> String {
    (0..NUMBER_LEN)
        .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::NoEffects;
    use crate::sequencer::TICKS_PER_SEC;

    fn tick_out_memorize(game: &mut Metamorphic) {
        let mut fx = NoEffects;
        for _ in 0..DISPLAY_SECS * TICKS_PER_SEC {
            game.on_tick(&mut fx);
        }
    }

    fn type_number(game: &mut Metamorphic, digits: &str) {
        let mut fx = NoEffects;
        for c in digits.chars() {
            game.on_key(KeyEvent::from(KeyCode::Char(c)), &mut fx);
        }
        game.on_key(KeyEvent::from(KeyCode::Enter), &mut fx);
    }

    #[test]
    fn test_begin_generates_ten_digits() {
        let mut game = Metamorphic::new().unwrap();
        let mut rng = rand::thread_rng();
        game.begin(&mut rng);

        assert_eq!(game.current_number.len(), NUMBER_LEN);
        assert!(game.current_number.chars().all(|c| c.is_ascii_digit()));
        assert!(game.is_memorizing());
        assert_eq!(game.round(), 1);
    }

    #[test]
    fn test_recall_answer_becomes_next_number() {
        let mut game = Metamorphic::new().unwrap();
        let mut rng = rand::thread_rng();
        game.begin(&mut rng);

        tick_out_memorize(&mut game);
        assert!(game.is_recalling());

        type_number(&mut game, "1234567890");
        assert_eq!(game.current_number, "1234567890");
        assert_eq!(game.history.len(), 2);
        assert!(game.is_memorizing());
        assert_eq!(game.round(), 2);
    }

    #[test]
    fn test_short_submission_is_rejected_with_message() {
        let mut game = Metamorphic::new().unwrap();
        let mut rng = rand::thread_rng();
        game.begin(&mut rng);
        tick_out_memorize(&mut game);

        type_number(&mut game, "123");
        assert!(game.error.is_some());
        assert!(game.is_recalling(), "round must not advance");
        assert_eq!(game.history.len(), 1);
    }

    #[test]
    fn test_non_digits_are_dropped() {
        let mut game = Metamorphic::new().unwrap();
        let mut rng = rand::thread_rng();
        game.begin(&mut rng);
        tick_out_memorize(&mut game);

        let mut fx = NoEffects;
        for c in "1a2b3!".chars() {
            game.on_key(KeyEvent::from(KeyCode::Char(c)), &mut fx);
        }
        assert_eq!(game.input, "123");
    }

    #[test]
    fn test_five_rounds_then_complete() {
        let mut game = Metamorphic::new().unwrap();
        let mut rng = rand::thread_rng();
        game.begin(&mut rng);

        for _ in 0..ROUNDS {
            tick_out_memorize(&mut game);
            type_number(&mut game, "0000000000");
        }
        assert_eq!(game.status(), Status::Complete);
        // First generated number plus one submission per round
        assert_eq!(game.history.len(), ROUNDS + 1);
    }

    #[test]
    fn test_replay_returns_to_intro() {
        let mut game = Metamorphic::new().unwrap();
        let mut rng = rand::thread_rng();
        game.begin(&mut rng);
        for _ in 0..ROUNDS {
            tick_out_memorize(&mut game);
            type_number(&mut game, "9999999999");
        }
        assert_eq!(game.status(), Status::Complete);

        let mut fx = NoEffects;
        game.on_key(KeyEvent::from(KeyCode::Char('r')), &mut fx);
        assert_eq!(game.status(), Status::Idle);
        assert!(game.history.is_empty());
    }
}
