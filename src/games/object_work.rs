use crate::effects::Effects;
use crate::error::RiffError;
use crate::sequencer::{Phase, Sequencer};
use crossterm::event::{KeyCode, KeyEvent};
use std::time::Instant;

/// Arena measured in terminal cells; the renderer maps this 1:1 into a
/// fixed-size block and the shell translates mouse coordinates back.
pub const ARENA_W: f64 = 60.0;
pub const ARENA_H: f64 = 18.0;

/// The platform spans the middle of the top edge.
pub const PLATFORM_ROW: f64 = 2.0;
pub const PLATFORM_X0: f64 = 20.0;
pub const PLATFORM_X1: f64 = 40.0;

/// Drops within one row of the platform snap onto it.
const SNAP_DISTANCE: f64 = 1.0;

const LIGHT_LIMIT_MS: u64 = 1000;
const HEAVY_MIN_MS: u64 = 3000;
const INTERLUDE_TICKS: u32 = 12;

/// How fast the drag must be for the object's imagined weight to read
/// as true.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pace {
    /// Light objects fly: the whole drag must take less than this.
    Under(u64),
    /// Heavy objects strain: the drag must take at least this.
    AtLeast(u64),
}

impl Pace {
    pub fn judge(self, elapsed_ms: u64) -> bool {
        match self {
            Pace::Under(limit) => elapsed_ms < limit,
            Pace::AtLeast(min) => elapsed_ms >= min,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Level {
    pub object: &'static str,
    pub brief: &'static str,
    pub pace: Pace,
    pub fail_hint: &'static str,
}

pub const LEVELS: [Level; 2] = [
    Level {
        object: "beach ball",
        brief: "It weighs nothing. Fling it onto the shelf in one quick motion.",
        pace: Pace::Under(LIGHT_LIMIT_MS),
        fail_hint: "Too slow. A beach ball doesn't need to be carried.",
    },
    Level {
        object: "stone crate",
        brief: "It's heavy. Haul it up slowly; let the weight show.",
        pace: Pace::AtLeast(HEAVY_MIN_MS),
        fail_hint: "Too fast. Nobody tosses a stone crate.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    WrongPace,
    Missed,
}

/// Mouse input already translated into arena coordinates by the shell.
#[derive(Debug, Clone, Copy)]
pub enum DragInput {
    Press { x: f64, y: f64 },
    Move { x: f64, y: f64 },
    Release,
}

/// Week 3: drag imaginary objects onto a platform at a pace that matches
/// their imagined weight.
#[derive(Debug)]
pub struct ObjectWork {
    pub level_index: usize,
    pub object_pos: (f64, f64),
    pub started: bool,
    pub finished: bool,
    pub outcome: Option<Outcome>,
    dragging: bool,
    drag_started: Option<Instant>,
    interlude: Sequencer,
}

/// The object starts bottom-center of the arena.
fn start_pos() -> (f64, f64) {
    (ARENA_W / 2.0, ARENA_H - 2.0)
}

impl ObjectWork {
    pub fn new() -> Result<Self, RiffError> {
        Ok(Self {
            level_index: 0,
            object_pos: start_pos(),
            started: false,
            finished: false,
            outcome: None,
            dragging: false,
            drag_started: None,
            interlude: Sequencer::new(vec![Phase::timed("interlude", INTERLUDE_TICKS)])?,
        })
    }

    pub fn level(&self) -> &'static Level {
        &LEVELS[self.level_index]
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    fn accepting_input(&self) -> bool {
        self.started && !self.finished && !self.interlude.is_running()
    }

    pub fn on_tick(&mut self, _fx: &mut dyn Effects) {
        if self.interlude.tick().is_some() {
            // The verdict has been on screen long enough; set up the next
            // attempt (or the next level).
            if self.outcome == Some(Outcome::Success) {
                self.level_index += 1;
            }
            self.outcome = None;
            self.object_pos = start_pos();
            self.interlude.reset();
        }
    }

    pub fn on_key(&mut self, key: KeyEvent, _fx: &mut dyn Effects) {
        if !self.started {
            if key.code == KeyCode::Enter {
                self.started = true;
            }
        } else if self.finished && matches!(key.code, KeyCode::Enter | KeyCode::Char('r')) {
            self.level_index = 0;
            self.object_pos = start_pos();
            self.finished = false;
            self.outcome = None;
            self.dragging = false;
            self.drag_started = None;
        }
    }

    pub fn on_mouse(&mut self, input: DragInput, now: Instant) {
        if !self.accepting_input() {
            return;
        }
        match input {
            DragInput::Press { x, y } => {
                let (bx, by) = self.object_pos;
                if (x - bx).abs() <= 2.0 && (y - by).abs() <= 1.0 {
                    self.dragging = true;
                    self.drag_started = Some(now);
                }
            }
            DragInput::Move { x, y } => {
                if self.dragging {
                    self.object_pos = (x.clamp(0.0, ARENA_W - 1.0), y.clamp(0.0, ARENA_H - 1.0));
                }
            }
            DragInput::Release => {
                if self.dragging {
                    self.dragging = false;
                    self.resolve(now);
                }
            }
        }
    }

    fn resolve(&mut self, now: Instant) {
        let elapsed_ms = self
            .drag_started
            .take()
            .map(|t| now.duration_since(t).as_millis() as u64)
            .unwrap_or(0);

        let (x, y) = self.object_pos;
        let on_platform = (PLATFORM_ROW - SNAP_DISTANCE..=PLATFORM_ROW + SNAP_DISTANCE)
            .contains(&y)
            && (PLATFORM_X0..=PLATFORM_X1).contains(&x);

        if !on_platform {
            self.outcome = Some(Outcome::Missed);
        } else {
            self.object_pos = (x, PLATFORM_ROW);
            self.outcome = if self.level().pace.judge(elapsed_ms) {
                Some(Outcome::Success)
            } else {
                Some(Outcome::WrongPace)
            };
        }

        if self.outcome == Some(Outcome::Success) && self.level_index + 1 >= LEVELS.len() {
            self.finished = true;
        } else {
            self.interlude.start();
        }
    }
}
