use crate::effects::Effects;
use crate::error::RiffError;
use crate::pool::Sampler;
use crate::sequencer::{Phase, Sequencer, Status};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rand::Rng;

pub const SENTENCE_COUNT: usize = 10;
pub const BLOCK_COUNT: usize = 5;
const MAX_SENTENCE_LEN: usize = 120;

/// The three lines of a block. `Given` lines came from the setup form;
/// the bridge is written live.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Opener,
    Bridge,
    Closer,
}

#[derive(Debug, Clone)]
pub struct StoryBlock {
    pub opener: String,
    pub bridge: String,
    pub closer: String,
    pub order: [Slot; 3],
}

impl StoryBlock {
    pub fn line(&self, slot: Slot) -> &str {
        match slot {
            Slot::Opener => &self.opener,
            Slot::Bridge => &self.bridge,
            Slot::Closer => &self.closer,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Setup,
    Writing,
    Conclude,
}

/// Week 5: write ten throwaway sentences, then get them handed back in
/// random pairs and invent the line that connects each pair. The pair
/// and the bridge can be shuffled into any order before committing.
#[derive(Debug)]
pub struct StoryConnections {
    seq: Sequencer,
    pub sentences: [String; SENTENCE_COUNT],
    pub focus: usize,
    pub blocks: Vec<StoryBlock>,
    pub bridge_input: String,
    pub order: [Slot; 3],
    pub selected_row: usize,
    pub error: Option<String>,
}

impl StoryConnections {
    pub fn new() -> Result<Self, RiffError> {
        let mut phases = vec![Phase::gated("setup")];
        phases.extend((0..BLOCK_COUNT).map(|_| Phase::gated("block")));
        let mut seq = Sequencer::new(phases)?;
        // No intro screen; the setup form is the front door.
        seq.start();
        Ok(Self {
            seq,
            sentences: Default::default(),
            focus: 0,
            blocks: Vec::new(),
            bridge_input: String::new(),
            order: [Slot::Opener, Slot::Bridge, Slot::Closer],
            selected_row: 0,
            error: None,
        })
    }

    pub fn stage(&self) -> Stage {
        if self.seq.status() == Status::Complete {
            Stage::Conclude
        } else if self.seq.phase_index() == 0 {
            Stage::Setup
        } else {
            Stage::Writing
        }
    }

    /// 0-based index of the block being written.
    pub fn block_index(&self) -> usize {
        self.seq.phase_index().saturating_sub(1)
    }

    pub fn current_block(&self) -> Option<&StoryBlock> {
        self.blocks.get(self.block_index())
    }

    pub fn on_tick(&mut self, _fx: &mut dyn Effects) {}

    pub fn on_key(&mut self, key: KeyEvent, _fx: &mut dyn Effects) {
        match self.stage() {
            Stage::Setup => self.on_setup_key(key),
            Stage::Writing => self.on_writing_key(key),
            Stage::Conclude => {
                if matches!(key.code, KeyCode::Enter | KeyCode::Char('r')) {
                    self.restart();
                }
            }
        }
    }

    fn on_setup_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(c) => {
                let slot = &mut self.sentences[self.focus];
                if slot.len() < MAX_SENTENCE_LEN {
                    slot.push(c);
                    self.error = None;
                }
            }
            KeyCode::Backspace => {
                self.sentences[self.focus].pop();
            }
            KeyCode::Down => {
                self.focus = (self.focus + 1) % SENTENCE_COUNT;
            }
            KeyCode::Up => {
                self.focus = self.focus.checked_sub(1).unwrap_or(SENTENCE_COUNT - 1);
            }
            KeyCode::Enter => {
                if self.focus + 1 < SENTENCE_COUNT {
                    self.focus += 1;
                } else {
                    let mut rng = rand::thread_rng();
                    self.submit_setup(&mut rng);
                }
            }
            _ => {}
        }
    }

    fn on_writing_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up if key.modifiers.contains(KeyModifiers::CONTROL) => self.move_row(-1),
            KeyCode::Down if key.modifiers.contains(KeyModifiers::CONTROL) => self.move_row(1),
            KeyCode::Up => self.selected_row = self.selected_row.saturating_sub(1),
            KeyCode::Down => self.selected_row = (self.selected_row + 1).min(2),
            KeyCode::Char(c) => {
                if self.bridge_input.len() < MAX_SENTENCE_LEN {
                    self.bridge_input.push(c);
                    self.error = None;
                }
            }
            KeyCode::Backspace => {
                self.bridge_input.pop();
            }
            KeyCode::Enter => self.submit_block(),
            _ => {}
        }
    }

    /// Validate the form, then deal the ten sentences out as five
    /// opener/closer pairs. The pool is exactly exhausted.
    pub fn submit_setup<R: Rng>(&mut self, rng: &mut R) {
        for (i, s) in self.sentences.iter().enumerate() {
            if s.trim().is_empty() {
                self.error = Some(format!("sentence {} is still blank", i + 1));
                self.focus = i;
                return;
            }
        }

        let mut sampler = Sampler::new("sentences", SENTENCE_COUNT);
        self.blocks = (0..BLOCK_COUNT)
            .map(|_| {
                // SENTENCE_COUNT == 2 * BLOCK_COUNT, so draws cannot fail
                let a = sampler.draw(rng).unwrap_or(0);
                let b = sampler.draw(rng).unwrap_or(0);
                StoryBlock {
                    opener: self.sentences[a].trim().to_string(),
                    bridge: String::new(),
                    closer: self.sentences[b].trim().to_string(),
                    order: [Slot::Opener, Slot::Bridge, Slot::Closer],
                }
            })
            .collect();
        self.error = None;
        self.seq.advance_phase();
    }

    fn move_row(&mut self, dir: i32) {
        let from = self.selected_row;
        let to = from as i32 + dir;
        if (0..3).contains(&to) {
            self.order.swap(from, to as usize);
            self.selected_row = to as usize;
        }
    }

    pub fn submit_block(&mut self) {
        if self.bridge_input.trim().is_empty() {
            self.error = Some("write the connecting line first".into());
            return;
        }
        let idx = self.block_index();
        if let Some(block) = self.blocks.get_mut(idx) {
            block.bridge = self.bridge_input.trim().to_string();
            block.order = self.order;
        }
        self.bridge_input.clear();
        self.order = [Slot::Opener, Slot::Bridge, Slot::Closer];
        self.selected_row = 0;
        self.error = None;
        self.seq.advance_phase();
    }

    fn restart(&mut self) {
        self.seq.reset();
        self.seq.start();
        self.sentences = Default::default();
        self.focus = 0;
        self.blocks.clear();
        self.bridge_input.clear();
        self.order = [Slot::Opener, Slot::Bridge, Slot::Closer];
        self.selected_row = 0;
        self.error = None;
    }
}
