pub mod improv_keys;
pub mod metamorphic;
pub mod new_choice;
pub mod object_work;
pub mod reflections;
pub mod status_dynamics;
pub mod story_connections;
pub mod switch_left;
pub mod three_things;
pub mod vigil;

use crate::effects::Effects;
use crate::error::RiffError;
use crossterm::event::KeyEvent;
use std::time::Instant;
use strum_macros::Display;

use improv_keys::ImprovKeys;
use metamorphic::Metamorphic;
use new_choice::NewChoice;
use object_work::{DragInput, ObjectWork};
use reflections::Reflections;
use status_dynamics::StatusDynamics;
use story_connections::StoryConnections;
use switch_left::SwitchLeft;
use three_things::ThreeThings;
use vigil::Vigil;

/// The course pages, one per tab.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum Week {
    #[strum(serialize = "week 1")]
    Week1,
    #[strum(serialize = "week 2")]
    Week2,
    #[strum(serialize = "week 3")]
    Week3,
    #[strum(serialize = "week 4")]
    Week4,
    #[strum(serialize = "week 5")]
    Week5,
    #[strum(serialize = "week 6")]
    Week6,
    #[strum(serialize = "week 7")]
    Week7,
    #[strum(serialize = "week 8")]
    Week8,
    #[strum(serialize = "week 9")]
    Week9,
    #[strum(serialize = "conclusions")]
    Conclusions,
}

impl Week {
    pub const ALL: [Week; 10] = [
        Week::Week1,
        Week::Week2,
        Week::Week3,
        Week::Week4,
        Week::Week5,
        Week::Week6,
        Week::Week7,
        Week::Week8,
        Week::Week9,
        Week::Conclusions,
    ];

    pub fn number(self) -> u8 {
        self as u8 + 1
    }

    pub fn from_number(n: u8) -> Option<Week> {
        Week::ALL.get(n.checked_sub(1)? as usize).copied()
    }

    pub fn title(self) -> &'static str {
        match self {
            Week::Week1 => "Three Things",
            Week::Week2 => "Metamorphosis",
            Week::Week3 => "Object Work",
            Week::Week4 => "The Vigil",
            Week::Week5 => "Story Connections",
            Week::Week6 => "Status Dynamics",
            Week::Week7 => "Switch Left",
            Week::Week8 => "New Choice",
            Week::Week9 => "Improv Keys",
            Week::Conclusions => "Reflections",
        }
    }

    pub fn next(self) -> Week {
        let i = Week::ALL.iter().position(|&w| w == self).unwrap_or(0);
        Week::ALL[(i + 1) % Week::ALL.len()]
    }

    pub fn prev(self) -> Week {
        let i = Week::ALL.iter().position(|&w| w == self).unwrap_or(0);
        Week::ALL[(i + Week::ALL.len() - 1) % Week::ALL.len()]
    }
}

/// The one mounted game. Switching tabs drops the old value, which is
/// what cancels its timers: nothing ticks unless the shell forwards
/// ticks to it.
#[derive(Debug)]
pub enum ActiveGame {
    ThreeThings(ThreeThings),
    Metamorphic(Metamorphic),
    ObjectWork(ObjectWork),
    Vigil(Vigil),
    StoryConnections(StoryConnections),
    StatusDynamics(StatusDynamics),
    SwitchLeft(SwitchLeft),
    NewChoice(NewChoice),
    ImprovKeys(ImprovKeys),
    Reflections(Reflections),
}

impl ActiveGame {
    pub fn mount(week: Week) -> Result<Self, RiffError> {
        Ok(match week {
            Week::Week1 => ActiveGame::ThreeThings(ThreeThings::new()?),
            Week::Week2 => ActiveGame::Metamorphic(Metamorphic::new()?),
            Week::Week3 => ActiveGame::ObjectWork(ObjectWork::new()?),
            Week::Week4 => ActiveGame::Vigil(Vigil::new()?),
            Week::Week5 => ActiveGame::StoryConnections(StoryConnections::new()?),
            Week::Week6 => ActiveGame::StatusDynamics(StatusDynamics::new()?),
            Week::Week7 => ActiveGame::SwitchLeft(SwitchLeft::new()?),
            Week::Week8 => ActiveGame::NewChoice(NewChoice::new()?),
            Week::Week9 => ActiveGame::ImprovKeys(ImprovKeys::new()?),
            Week::Conclusions => ActiveGame::Reflections(Reflections::new()),
        })
    }

    pub fn on_tick(&mut self, fx: &mut dyn Effects) {
        match self {
            ActiveGame::ThreeThings(g) => g.on_tick(fx),
            ActiveGame::Metamorphic(g) => g.on_tick(fx),
            ActiveGame::ObjectWork(g) => g.on_tick(fx),
            ActiveGame::Vigil(g) => g.on_tick(fx),
            ActiveGame::StoryConnections(g) => g.on_tick(fx),
            ActiveGame::StatusDynamics(g) => g.on_tick(fx),
            ActiveGame::SwitchLeft(g) => g.on_tick(fx),
            ActiveGame::NewChoice(g) => g.on_tick(fx),
            ActiveGame::ImprovKeys(g) => g.on_tick(fx),
            ActiveGame::Reflections(g) => g.on_tick(fx),
        }
    }

    pub fn on_key(&mut self, key: KeyEvent, fx: &mut dyn Effects) {
        match self {
            ActiveGame::ThreeThings(g) => g.on_key(key, fx),
            ActiveGame::Metamorphic(g) => g.on_key(key, fx),
            ActiveGame::ObjectWork(g) => g.on_key(key, fx),
            ActiveGame::Vigil(g) => g.on_key(key, fx),
            ActiveGame::StoryConnections(g) => g.on_key(key, fx),
            ActiveGame::StatusDynamics(g) => g.on_key(key, fx),
            ActiveGame::SwitchLeft(g) => g.on_key(key, fx),
            ActiveGame::NewChoice(g) => g.on_key(key, fx),
            ActiveGame::ImprovKeys(g) => g.on_key(key, fx),
            ActiveGame::Reflections(g) => g.on_key(key, fx),
        }
    }

    /// Only the drag game listens to the mouse.
    pub fn on_mouse(&mut self, input: DragInput, now: Instant) {
        if let ActiveGame::ObjectWork(g) = self {
            g.on_mouse(input, now);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_week_numbers_roundtrip() {
        for week in Week::ALL {
            assert_eq!(Week::from_number(week.number()), Some(week));
        }
        assert_eq!(Week::from_number(0), None);
        assert_eq!(Week::from_number(11), None);
    }

    #[test]
    fn test_week_labels_read_naturally() {
        assert_eq!(Week::Week1.to_string(), "week 1");
        assert_eq!(Week::Week9.to_string(), "week 9");
        assert_eq!(Week::Conclusions.to_string(), "conclusions");
    }

    #[test]
    fn test_week_navigation_wraps() {
        assert_eq!(Week::Conclusions.next(), Week::Week1);
        assert_eq!(Week::Week1.prev(), Week::Conclusions);
        assert_eq!(Week::Week4.next(), Week::Week5);
    }

    #[test]
    fn test_every_week_mounts() {
        for week in Week::ALL {
            assert!(ActiveGame::mount(week).is_ok(), "{week} failed to mount");
        }
    }
}
