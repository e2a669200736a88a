use crate::effects::{Effects, Note};
use crate::error::RiffError;
use crate::playback::{LoopPlayer, RecordedNote};
use crate::sequencer::{secs, Phase, Sequencer, TICKS_PER_SEC};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::Instant;

const PRACTICE_SECS: u32 = 15;
const COUNTDOWN_SECS: u32 = 3;
const RECITAL_SECS: u32 = 20;

/// How long a struck key stays lit, in ticks.
const FLASH_TICKS: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Practice,
    Countdown,
    Recital,
    Playback,
}

/// Week 9: noodle on a ten-key home-row piano, then record a twenty
/// second recital that loops underneath while you write about it.
#[derive(Debug)]
pub struct ImprovKeys {
    seq: Sequencer,
    pub recorded: Vec<RecordedNote>,
    pub story: String,
    pub flash: Option<(Note, u32)>,
    recital_started: Option<Instant>,
    player: Option<LoopPlayer>,
}

impl ImprovKeys {
    /// No intro screen; the practice clock starts the moment the game
    /// mounts.
    pub fn new() -> Result<Self, RiffError> {
        let mut seq = Sequencer::new(vec![
            Phase::timed("practice", secs(PRACTICE_SECS)),
            Phase::timed("countdown", secs(COUNTDOWN_SECS)),
            Phase::timed("recital", secs(RECITAL_SECS)),
            Phase::gated("playback"),
        ])?;
        seq.start();
        Ok(Self {
            seq,
            recorded: Vec::new(),
            story: String::new(),
            flash: None,
            recital_started: None,
            player: None,
        })
    }

    pub fn stage(&self) -> Stage {
        match self.seq.current_phase().name {
            "practice" => Stage::Practice,
            "countdown" => Stage::Countdown,
            "recital" => Stage::Recital,
            _ => Stage::Playback,
        }
    }

    pub fn remaining_secs(&self) -> u32 {
        self.seq.remaining_secs()
    }

    pub fn on_tick(&mut self, fx: &mut dyn Effects) {
        self.on_tick_at(Instant::now(), fx);
    }

    pub fn on_tick_at(&mut self, now: Instant, fx: &mut dyn Effects) {
        if let Some((note, ticks)) = self.flash {
            self.flash = if ticks > 1 { Some((note, ticks - 1)) } else { None };
        }

        if let Some(expiry) = self.seq.tick() {
            match expiry.name {
                "practice" => fx.metronome_tick(), // the "3" beat
                "countdown" => self.recital_started = Some(now),
                "recital" => {
                    self.player = Some(LoopPlayer::new(self.recorded.clone(), now));
                }
                _ => {}
            }
            return;
        }

        match self.stage() {
            Stage::Countdown => {
                // One click per remaining whole second ("2", "1").
                let remaining = self.seq.remaining_ticks();
                if remaining > 0 && remaining % TICKS_PER_SEC == 0 {
                    fx.metronome_tick();
                }
            }
            Stage::Playback => {
                if let Some(player) = self.player.as_mut() {
                    for due in player.poll(now) {
                        fx.play_tone(due.note);
                        self.flash = Some((due.note, FLASH_TICKS));
                    }
                }
            }
            _ => {}
        }
    }

    pub fn on_key(&mut self, key: KeyEvent, fx: &mut dyn Effects) {
        self.on_key_at(key, Instant::now(), fx);
    }

    pub fn on_key_at(&mut self, key: KeyEvent, now: Instant, fx: &mut dyn Effects) {
        match self.stage() {
            Stage::Practice | Stage::Recital => {
                if let KeyCode::Char(c) = key.code {
                    if let Some(note) = Note::from_key(c) {
                        self.strike(note, now, fx);
                    }
                }
            }
            Stage::Countdown => {}
            Stage::Playback => match key.code {
                KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.restart();
                }
                KeyCode::Char(c) => self.story.push(c),
                KeyCode::Enter => self.story.push('\n'),
                KeyCode::Backspace => {
                    self.story.pop();
                }
                _ => {}
            },
        }
    }

    fn strike(&mut self, note: Note, now: Instant, fx: &mut dyn Effects) {
        fx.play_tone(note);
        self.flash = Some((note, FLASH_TICKS));
        if self.stage() == Stage::Recital {
            if let Some(start) = self.recital_started {
                self.recorded.push(RecordedNote {
                    note,
                    offset_ms: now.duration_since(start).as_millis() as u64,
                });
            }
        }
    }

    fn restart(&mut self) {
        self.seq.reset();
        self.seq.start();
        self.recorded.clear();
        self.story.clear();
        self.flash = None;
        self.recital_started = None;
        self.player = None;
    }
}
