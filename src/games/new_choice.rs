use crate::effects::Effects;
use crate::error::RiffError;
use crate::pool::{ContentPool, Sampler};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rand::Rng;

/// Chance that any given sentence is let through. Independent per
/// submission; a string of rejections carries no memory.
pub const ACCEPT_PROBABILITY: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Intro,
    Writing,
    Summary,
}

/// Week 8: continue a story one sentence at a time while a coin-flip
/// director yells "new choice!" and makes you rewrite the line.
#[derive(Debug)]
pub struct NewChoice {
    pool: ContentPool,
    sampler: Sampler,
    pub opening: Option<String>,
    pub sentences: Vec<String>,
    pub input: String,
    pub rejected: bool,
    pub stage: Stage,
}

impl NewChoice {
    pub fn new() -> Result<Self, RiffError> {
        let pool = ContentPool::load("opening_lines.json")?;
        let sampler = Sampler::new("opening_lines", pool.len());
        Ok(Self {
            pool,
            sampler,
            opening: None,
            sentences: Vec::new(),
            input: String::new(),
            rejected: false,
            stage: Stage::Intro,
        })
    }

    pub fn begin<R: Rng>(&mut self, rng: &mut R) -> Result<(), RiffError> {
        self.sampler.reset(self.pool.len());
        let idx = self.sampler.draw(rng)?;
        self.opening = Some(self.pool.entries[idx].clone());
        self.sentences.clear();
        self.input.clear();
        self.rejected = false;
        self.stage = Stage::Writing;
        Ok(())
    }

    pub fn on_tick(&mut self, _fx: &mut dyn Effects) {}

    pub fn on_key(&mut self, key: KeyEvent, _fx: &mut dyn Effects) {
        match self.stage {
            Stage::Intro => {
                if key.code == KeyCode::Enter {
                    let mut rng = rand::thread_rng();
                    let _ = self.begin(&mut rng);
                }
            }
            Stage::Writing => match key.code {
                KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.stage = Stage::Summary;
                }
                KeyCode::Char(c) => {
                    self.input.push(c);
                    self.rejected = false;
                }
                KeyCode::Backspace => {
                    self.input.pop();
                }
                KeyCode::Enter => {
                    let mut rng = rand::thread_rng();
                    self.submit(&mut rng);
                }
                _ => {}
            },
            Stage::Summary => {
                if matches!(key.code, KeyCode::Enter | KeyCode::Char('r')) {
                    self.stage = Stage::Intro;
                    self.opening = None;
                    self.sentences.clear();
                    self.input.clear();
                    self.rejected = false;
                }
            }
        }
    }

    pub fn submit<R: Rng>(&mut self, rng: &mut R) {
        if self.input.trim().is_empty() {
            return;
        }
        self.resolve_submission(rng.gen_bool(ACCEPT_PROBABILITY));
    }

    /// An accepted sentence joins the story; a rejected one is wiped and
    /// the banner goes up until the player starts typing again.
    pub fn resolve_submission(&mut self, accepted: bool) {
        if accepted {
            self.sentences.push(self.input.trim().to_string());
            self.rejected = false;
        } else {
            self.rejected = true;
        }
        self.input.clear();
    }

    /// The whole story so far, opening line included.
    pub fn story_lines(&self) -> Vec<&str> {
        self.opening
            .iter()
            .map(String::as_str)
            .chain(self.sentences.iter().map(String::as_str))
            .collect()
    }
}
