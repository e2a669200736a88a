use crate::effects::Effects;
use crate::error::RiffError;
use crate::pool::{ContentPool, Sampler};
use crate::sequencer::{secs, Phase, Sequencer};
use crossterm::event::{KeyCode, KeyEvent};
use rand::Rng;

pub const STORY_COUNT: usize = 4;
pub const ROUND_COUNT: usize = 3;
const WRITE_SECS: u32 = 10;
const PAUSE_TICKS: u32 = 4;
const TRANSITION_SECS: u32 = 2;

/// One story being passed around the circle: its prompt and what got
/// written in each round.
#[derive(Debug, Clone)]
pub struct Story {
    pub prompt: String,
    pub rounds: [String; ROUND_COUNT],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Intro,
    Playing,
    Summary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    Write,
    Pause,
    Transition,
}

/// Week 7: four stories move one seat left every round. Ten seconds of
/// writing per story, three rounds, then each story is read back
/// stitched together with the drawn transition phrases.
#[derive(Debug)]
pub struct SwitchLeft {
    prompt_pool: ContentPool,
    transition_pool: ContentPool,
    prompt_sampler: Sampler,
    transition_sampler: Sampler,
    pub stories: Vec<Story>,
    pub transitions: Vec<String>,
    pub round: usize,
    pub story_index: usize,
    seq: Sequencer,
    stage: Stage,
}

impl SwitchLeft {
    pub fn new() -> Result<Self, RiffError> {
        let prompt_pool = ContentPool::load("story_prompts.json")?;
        let transition_pool = ContentPool::load("transitions.json")?;
        let prompt_sampler = Sampler::new("story_prompts", prompt_pool.len());
        let transition_sampler = Sampler::new("transitions", transition_pool.len());
        Ok(Self {
            prompt_pool,
            transition_pool,
            prompt_sampler,
            transition_sampler,
            stories: Vec::new(),
            transitions: Vec::new(),
            round: 0,
            story_index: 0,
            seq: write_segment()?,
            stage: Stage::Intro,
        })
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn segment(&self) -> Segment {
        match self.seq.current_phase().name {
            "pause" => Segment::Pause,
            "transition" => Segment::Transition,
            _ => Segment::Write,
        }
    }

    pub fn remaining_secs(&self) -> u32 {
        self.seq.remaining_secs()
    }

    pub fn is_writing(&self) -> bool {
        self.stage == Stage::Playing && self.segment() == Segment::Write && self.seq.is_running()
    }

    /// The transition phrase read before `round` (none before the first).
    pub fn transition_before_round(&self, round: usize) -> Option<&str> {
        round
            .checked_sub(1)
            .and_then(|i| self.transitions.get(i))
            .map(String::as_str)
    }

    pub fn begin<R: Rng>(&mut self, rng: &mut R) -> Result<(), RiffError> {
        self.prompt_sampler.reset(self.prompt_pool.len());
        self.transition_sampler.reset(self.transition_pool.len());

        self.stories = (0..STORY_COUNT)
            .map(|_| {
                let idx = self.prompt_sampler.draw(rng)?;
                Ok(Story {
                    prompt: self.prompt_pool.entries[idx].clone(),
                    rounds: Default::default(),
                })
            })
            .collect::<Result<_, RiffError>>()?;
        self.transitions = (0..ROUND_COUNT - 1)
            .map(|_| {
                let idx = self.transition_sampler.draw(rng)?;
                Ok(self.transition_pool.entries[idx].clone())
            })
            .collect::<Result<_, RiffError>>()?;

        self.round = 0;
        self.story_index = 0;
        self.stage = Stage::Playing;
        self.seq = write_segment()?;
        self.seq.start();
        Ok(())
    }

    pub fn on_tick(&mut self, _fx: &mut dyn Effects) {
        let Some(expiry) = self.seq.tick() else {
            return;
        };
        if expiry.name != "pause" && expiry.name != "transition" {
            // End of a write slot; the pause phase follows automatically.
            return;
        }
        if expiry.name == "transition" {
            self.round += 1;
            self.story_index = 0;
            self.restart_segment(write_segment());
            return;
        }
        // Pause over: next story, next round, or the reading.
        if self.story_index + 1 < STORY_COUNT {
            self.story_index += 1;
            self.restart_segment(write_segment());
        } else if self.round + 1 < ROUND_COUNT {
            self.restart_segment(transition_segment());
        } else {
            self.stage = Stage::Summary;
        }
    }

    pub fn on_key(&mut self, key: KeyEvent, _fx: &mut dyn Effects) {
        match self.stage {
            Stage::Intro => {
                if key.code == KeyCode::Enter {
                    let mut rng = rand::thread_rng();
                    let _ = self.begin(&mut rng);
                }
            }
            Stage::Playing => {
                if !self.is_writing() {
                    return;
                }
                let slot = &mut self.stories[self.story_index].rounds[self.round];
                match key.code {
                    KeyCode::Char(c) => slot.push(c),
                    KeyCode::Enter => slot.push(' '),
                    KeyCode::Backspace => {
                        slot.pop();
                    }
                    _ => {}
                }
            }
            Stage::Summary => {
                if matches!(key.code, KeyCode::Enter | KeyCode::Char('r')) {
                    self.stage = Stage::Intro;
                    self.stories.clear();
                    self.transitions.clear();
                }
            }
        }
    }

    fn restart_segment(&mut self, seq: Result<Sequencer, RiffError>) {
        // Phase lists are static, construction cannot fail here.
        if let Ok(mut seq) = seq {
            seq.start();
            self.seq = seq;
        }
    }
}

fn write_segment() -> Result<Sequencer, RiffError> {
    Sequencer::new(vec![
        Phase::timed("write", secs(WRITE_SECS)),
        Phase::timed("pause", PAUSE_TICKS),
    ])
}

fn transition_segment() -> Result<Sequencer, RiffError> {
    Sequencer::new(vec![Phase::timed("transition", secs(TRANSITION_SECS))])
}
