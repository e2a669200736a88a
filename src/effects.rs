/// Side effects the games may request from the presentation layer.
///
/// Games never draw, flash, or beep directly; they ask for a cue through
/// this trait and the shell decides how to realize it (confetti overlay,
/// key flash, status-line pulse). Tests plug in `RecordingEffects`.
pub trait Effects {
    /// Celebratory burst (week 1's confetti moment).
    fn celebrate(&mut self);

    /// A note was struck or replayed (week 9).
    fn play_tone(&mut self, note: Note);

    /// One metronome click per countdown second (week 9).
    fn metronome_tick(&mut self);
}

/// The ten playable notes, mapped from the home row a..; in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Note {
    A4,
    B4,
    C5,
    D5,
    E5,
    F5,
    G5,
    A5,
    B5,
    C6,
}

impl Note {
    pub const ALL: [Note; 10] = [
        Note::A4,
        Note::B4,
        Note::C5,
        Note::D5,
        Note::E5,
        Note::F5,
        Note::G5,
        Note::A5,
        Note::B5,
        Note::C6,
    ];

    /// Home-row key bound to each note.
    pub const KEYS: [char; 10] = ['a', 's', 'd', 'f', 'g', 'h', 'j', 'k', 'l', ';'];

    pub fn from_key(key: char) -> Option<Note> {
        Note::KEYS
            .iter()
            .position(|&k| k == key)
            .map(|i| Note::ALL[i])
    }

    pub fn key(self) -> char {
        Note::KEYS[self as usize]
    }

    /// Letter name shown on the on-screen keyboard.
    pub fn letter(self) -> char {
        match self {
            Note::A4 | Note::A5 => 'A',
            Note::B4 | Note::B5 => 'B',
            Note::C5 | Note::C6 => 'C',
            Note::D5 => 'D',
            Note::E5 => 'E',
            Note::F5 => 'F',
            Note::G5 => 'G',
        }
    }

    pub fn frequency_hz(self) -> f64 {
        match self {
            Note::A4 => 440.00,
            Note::B4 => 493.88,
            Note::C5 => 523.25,
            Note::D5 => 587.33,
            Note::E5 => 659.25,
            Note::F5 => 698.46,
            Note::G5 => 783.99,
            Note::A5 => 880.00,
            Note::B5 => 987.77,
            Note::C6 => 1046.50,
        }
    }
}

/// Swallows every cue. Used with `--no-effects`.
#[derive(Debug, Default)]
pub struct NoEffects;

impl Effects for NoEffects {
    fn celebrate(&mut self) {}
    fn play_tone(&mut self, _note: Note) {}
    fn metronome_tick(&mut self) {}
}

/// Records cues for assertions in headless tests.
#[derive(Debug, Default)]
pub struct RecordingEffects {
    pub celebrations: usize,
    pub tones: Vec<Note>,
    pub metronome_ticks: usize,
}

impl Effects for RecordingEffects {
    fn celebrate(&mut self) {
        self.celebrations += 1;
    }

    fn play_tone(&mut self, note: Note) {
        self.tones.push(note);
    }

    fn metronome_tick(&mut self) {
        self.metronome_ticks += 1;
    }
}
