pub mod celebration;
pub mod config;
pub mod effects;
pub mod error;
pub mod games;
pub mod playback;
pub mod pool;
pub mod runtime;
pub mod sequencer;
pub mod ui;

use crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use std::time::Instant;

use celebration::Celebration;
use effects::{Effects, Note};
use error::RiffError;
use games::object_work::DragInput;
use games::{ActiveGame, Week};

pub const TICK_RATE_MS: u64 = 100;

/// How long the status-line cues stay lit, in ticks.
const PULSE_TICKS: u32 = 3;

/// Top-level application state: which week is mounted, the one live
/// game, and the shell-owned effect surfaces.
pub struct App {
    pub week: Week,
    pub game: ActiveGame,
    pub celebration: Celebration,
    pub effects_enabled: bool,
    pub tone_pulse: Option<(Note, u32)>,
    pub metronome_pulse: u32,
    pub size: (u16, u16),
}

/// Realizes effect cues with what a terminal has: a confetti overlay
/// and status-line pulses.
struct ShellFx<'a> {
    celebration: &'a mut Celebration,
    tone_pulse: &'a mut Option<(Note, u32)>,
    metronome_pulse: &'a mut u32,
    enabled: bool,
    size: (u16, u16),
}

impl Effects for ShellFx<'_> {
    fn celebrate(&mut self) {
        if self.enabled {
            self.celebration.start(self.size.0, self.size.1);
        }
    }

    fn play_tone(&mut self, note: Note) {
        if self.enabled {
            *self.tone_pulse = Some((note, PULSE_TICKS));
        }
    }

    fn metronome_tick(&mut self) {
        if self.enabled {
            *self.metronome_pulse = PULSE_TICKS;
        }
    }
}

impl App {
    pub fn new(week: Week, effects_enabled: bool) -> Result<Self, RiffError> {
        Ok(Self {
            week,
            game: ActiveGame::mount(week)?,
            celebration: Celebration::new(),
            effects_enabled,
            tone_pulse: None,
            metronome_pulse: 0,
            size: (80, 24),
        })
    }

    /// Mount a different week. The previous game is dropped whole, which
    /// is the timer-cancellation story: no stale countdowns survive a
    /// tab switch.
    pub fn switch_to(&mut self, week: Week) -> Result<(), RiffError> {
        self.game = ActiveGame::mount(week)?;
        self.week = week;
        self.celebration = Celebration::new();
        self.tone_pulse = None;
        self.metronome_pulse = 0;
        Ok(())
    }

    pub fn next_week(&mut self) -> Result<(), RiffError> {
        self.switch_to(self.week.next())
    }

    pub fn prev_week(&mut self) -> Result<(), RiffError> {
        self.switch_to(self.week.prev())
    }

    pub fn handle_tick(&mut self) {
        let Self {
            game,
            celebration,
            effects_enabled,
            tone_pulse,
            metronome_pulse,
            size,
            ..
        } = self;
        let mut fx = ShellFx {
            celebration,
            tone_pulse,
            metronome_pulse,
            enabled: *effects_enabled,
            size: *size,
        };
        game.on_tick(&mut fx);

        self.celebration.update();
        if let Some((note, ticks)) = self.tone_pulse {
            self.tone_pulse = if ticks > 1 { Some((note, ticks - 1)) } else { None };
        }
        self.metronome_pulse = self.metronome_pulse.saturating_sub(1);
    }

    /// Returns true when the app should exit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind == crossterm::event::KeyEventKind::Release {
            return false;
        }
        match key.code {
            KeyCode::Esc => return true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return true,
            KeyCode::Tab => {
                let _ = self.next_week();
                return false;
            }
            KeyCode::BackTab => {
                let _ = self.prev_week();
                return false;
            }
            _ => {}
        }

        let Self {
            game,
            celebration,
            effects_enabled,
            tone_pulse,
            metronome_pulse,
            size,
            ..
        } = self;
        let mut fx = ShellFx {
            celebration,
            tone_pulse,
            metronome_pulse,
            enabled: *effects_enabled,
            size: *size,
        };
        game.on_key(key, &mut fx);
        false
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        let arena = ui::object_arena(ratatui::layout::Rect::new(0, 0, self.size.0, self.size.1));
        let x = (mouse.column.saturating_sub(arena.x)) as f64;
        let y = (mouse.row.saturating_sub(arena.y)) as f64;
        let input = match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => DragInput::Press { x, y },
            MouseEventKind::Drag(MouseButton::Left) => DragInput::Move { x, y },
            MouseEventKind::Up(MouseButton::Left) => DragInput::Release,
            _ => return,
        };
        self.game.on_mouse(input, Instant::now());
    }
}
