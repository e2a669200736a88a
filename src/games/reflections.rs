use crate::effects::Effects;
use crossterm::event::{KeyCode, KeyEvent};

/// Closing page: no timers, no input fields, just the course notes and a
/// scroll offset.
#[derive(Debug, Default)]
pub struct Reflections {
    pub scroll: u16,
}

pub const NOTES: &[(&str, &str)] = &[
    (
        "Say yes, and",
        "Every game here took whatever you gave it. Wrong answers became \
         the next round's material; a missed timer still got confetti.",
    ),
    (
        "The timer is a gift",
        "Five seconds for three things, ten seconds for a story beat. The \
         clock did not measure you; it gave you permission to stop editing.",
    ),
    (
        "Commit to the object",
        "A beach ball thrown slowly is a lie. The drag game only asked \
         that your body agree with your imagination.",
    ),
    (
        "Status is a seesaw",
        "Every line you gave the boss moved you both. There was no neutral \
         reply, and there never is.",
    ),
    (
        "New choice is not a rejection",
        "Half your sentences were thrown out by a coin. The story got \
         written anyway, and it was nobody's first idea.",
    ),
];

impl Reflections {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_tick(&mut self, _fx: &mut dyn Effects) {}

    pub fn on_key(&mut self, key: KeyEvent, _fx: &mut dyn Effects) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.scroll = self.scroll.saturating_sub(1),
            KeyCode::Down | KeyCode::Char('j') => {
                self.scroll = (self.scroll + 1).min(NOTES.len() as u16 * 4)
            }
            _ => {}
        }
    }
}
