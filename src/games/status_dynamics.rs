use crate::effects::Effects;
use crate::error::RiffError;
use crate::pool::DialogueScript;
use crate::sequencer::{Phase, Sequencer, Status};
use crossterm::event::{KeyCode, KeyEvent};

/// Breather between committing a reply and the boss's next line.
const BEAT_TICKS: u32 = 4;

/// Display range of the status bar; raw scores are unbounded.
pub const BAR_MIN: i32 = -5;
pub const BAR_MAX: i32 = 5;

/// Status is zero-sum: every point the employee gains comes off the boss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusPair {
    pub employee: i32,
    pub boss: i32,
}

impl StatusPair {
    pub fn apply(&mut self, employee_delta: i32) {
        self.employee += employee_delta;
        self.boss -= employee_delta;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    Boss,
    Employee,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub speaker: Speaker,
    pub text: String,
}

/// Week 6: a scripted exchange with the boss where every reply shifts a
/// zero-sum status meter one way or the other.
#[derive(Debug)]
pub struct StatusDynamics {
    script: DialogueScript,
    seq: Sequencer,
    pub status: StatusPair,
    pub messages: Vec<Message>,
    pub selected_option: usize,
}

impl StatusDynamics {
    pub fn new() -> Result<Self, RiffError> {
        let script = DialogueScript::load()?;
        let mut phases = Vec::with_capacity(script.blocks.len() * 2);
        for _ in 0..script.blocks.len() {
            phases.push(Phase::gated("choose"));
            phases.push(Phase::timed("beat", BEAT_TICKS));
        }
        Ok(Self {
            script,
            seq: Sequencer::new(phases)?,
            status: StatusPair::default(),
            messages: Vec::new(),
            selected_option: 0,
        })
    }

    pub fn status_fsm(&self) -> Status {
        self.seq.status()
    }

    pub fn is_concluded(&self) -> bool {
        self.seq.is_complete()
    }

    pub fn block_index(&self) -> usize {
        (self.seq.phase_index() / 2).min(self.script.blocks.len() - 1)
    }

    pub fn current_options(&self) -> Option<&[crate::pool::ResponseOption]> {
        if self.seq.status() == Status::AwaitingInput {
            Some(&self.script.blocks[self.block_index()].options)
        } else {
            None
        }
    }

    pub fn begin(&mut self) {
        self.status = StatusPair::default();
        self.messages = vec![Message {
            speaker: Speaker::Boss,
            text: self.script.blocks[0].boss.clone(),
        }];
        self.selected_option = 0;
        self.seq.reset();
        self.seq.start();
    }

    pub fn on_tick(&mut self, _fx: &mut dyn Effects) {
        if self.seq.tick().is_some() && !self.seq.is_complete() {
            // Beat over; the boss speaks the next block's line.
            self.messages.push(Message {
                speaker: Speaker::Boss,
                text: self.script.blocks[self.block_index()].boss.clone(),
            });
            self.selected_option = 0;
        }
    }

    pub fn on_key(&mut self, key: KeyEvent, _fx: &mut dyn Effects) {
        match self.seq.status() {
            Status::Idle => {
                if key.code == KeyCode::Enter {
                    self.begin();
                }
            }
            Status::AwaitingInput => {
                let option_count = self.script.blocks[self.block_index()].options.len();
                match key.code {
                    KeyCode::Up => {
                        self.selected_option = self.selected_option.saturating_sub(1);
                    }
                    KeyCode::Down => {
                        self.selected_option = (self.selected_option + 1).min(option_count - 1);
                    }
                    KeyCode::Char(c) if c.is_ascii_digit() => {
                        let n = c.to_digit(10).unwrap_or(0) as usize;
                        if (1..=option_count).contains(&n) {
                            self.choose(n - 1);
                        }
                    }
                    KeyCode::Enter => self.choose(self.selected_option),
                    _ => {}
                }
            }
            Status::Complete => {
                if matches!(key.code, KeyCode::Enter | KeyCode::Char('r')) {
                    self.begin();
                }
            }
            Status::Running => {}
        }
    }

    fn choose(&mut self, option_index: usize) {
        let block = &self.script.blocks[self.block_index()];
        let Some(option) = block.options.get(option_index) else {
            return;
        };
        self.messages.push(Message {
            speaker: Speaker::Employee,
            text: option.text.clone(),
        });
        self.status.apply(option.employee_delta);
        self.seq.advance_phase();
    }
}

/// Clamp a raw score into the drawable bar range.
pub fn bar_position(score: i32) -> i32 {
    score.clamp(BAR_MIN, BAR_MAX)
}
