use crate::error::RiffError;

/// One tick is 100ms (see `TICK_RATE_MS`); games express durations in ticks.
pub const TICKS_PER_SEC: u32 = 10;

/// Convenience for phase durations given in whole seconds.
pub const fn secs(n: u32) -> u32 {
    n * TICKS_PER_SEC
}

/// A named segment of a session's lifecycle.
///
/// A phase with `Some(n), n > 0` counts down and auto-advances on expiry.
/// A phase with `None` or `Some(0)` is input-gated: the sequencer parks in
/// `AwaitingInput` until `advance_phase` is called (e.g. a form submit).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Phase {
    pub name: &'static str,
    pub duration_ticks: Option<u32>,
}

impl Phase {
    pub const fn timed(name: &'static str, duration_ticks: u32) -> Self {
        Self {
            name,
            duration_ticks: Some(duration_ticks),
        }
    }

    pub const fn gated(name: &'static str) -> Self {
        Self {
            name,
            duration_ticks: None,
        }
    }

    fn is_timed(&self) -> bool {
        matches!(self.duration_ticks, Some(n) if n > 0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Idle,
    Running,
    AwaitingInput,
    Complete,
}

/// Emitted by `tick` when a timed phase counts down to zero. Session
/// controllers match on this to commit the live input buffer and request
/// effects (confetti, tones) from the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseExpiry {
    pub phase_index: usize,
    pub name: &'static str,
}

/// Immutable view handed to the renderer once per tick or state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequencerSnapshot {
    pub status: Status,
    pub phase_index: usize,
    pub name: &'static str,
    pub remaining_ticks: u32,
}

/// Finite state machine advancing through an ordered list of phases.
///
/// `Idle -> Running(0) -> ... -> Complete`, with `AwaitingInput` for
/// input-gated phases. There are no recoverable runtime errors: a bad
/// phase list is rejected at construction.
#[derive(Debug, Clone)]
pub struct Sequencer {
    phases: Vec<Phase>,
    status: Status,
    phase_index: usize,
    remaining_ticks: u32,
}

impl Sequencer {
    pub fn new(phases: Vec<Phase>) -> Result<Self, RiffError> {
        if phases.is_empty() {
            return Err(RiffError::config("sequencer needs at least one phase"));
        }
        Ok(Self {
            phases,
            status: Status::Idle,
            phase_index: 0,
            remaining_ticks: 0,
        })
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn phase_index(&self) -> usize {
        self.phase_index
    }

    pub fn remaining_ticks(&self) -> u32 {
        self.remaining_ticks
    }

    pub fn current_phase(&self) -> &Phase {
        &self.phases[self.phase_index.min(self.phases.len() - 1)]
    }

    /// Remaining whole seconds, rounded up so a countdown shows "1" until
    /// the moment it expires.
    pub fn remaining_secs(&self) -> u32 {
        self.remaining_ticks.div_ceil(TICKS_PER_SEC)
    }

    pub fn is_running(&self) -> bool {
        self.status == Status::Running
    }

    pub fn is_complete(&self) -> bool {
        self.status == Status::Complete
    }

    /// Transition `Idle -> Running` at phase 0. No-op if already started.
    pub fn start(&mut self) {
        if self.status != Status::Idle {
            return;
        }
        self.phase_index = 0;
        self.enter_current_phase();
    }

    /// Called once per elapsed tick. Returns the expiry event when the
    /// current phase counts down to zero on this tick.
    pub fn tick(&mut self) -> Option<PhaseExpiry> {
        if self.status != Status::Running {
            return None;
        }
        self.remaining_ticks = self.remaining_ticks.saturating_sub(1);
        if self.remaining_ticks > 0 {
            return None;
        }
        let expiry = PhaseExpiry {
            phase_index: self.phase_index,
            name: self.phases[self.phase_index].name,
        };
        self.advance();
        Some(expiry)
    }

    /// Explicit transition for input-gated phases (form submits and the
    /// like). No-op when `Idle` or `Complete`.
    pub fn advance_phase(&mut self) {
        if matches!(self.status, Status::Idle | Status::Complete) {
            return;
        }
        self.advance();
    }

    /// Back to `Idle` with no residual countdown or position. Used by
    /// every "Play Again" action; safe from any state.
    pub fn reset(&mut self) {
        self.status = Status::Idle;
        self.phase_index = 0;
        self.remaining_ticks = 0;
    }

    pub fn snapshot(&self) -> SequencerSnapshot {
        SequencerSnapshot {
            status: self.status,
            phase_index: self.phase_index,
            name: self.current_phase().name,
            remaining_ticks: self.remaining_ticks,
        }
    }

    fn advance(&mut self) {
        if self.phase_index + 1 >= self.phases.len() {
            self.status = Status::Complete;
            self.remaining_ticks = 0;
            return;
        }
        self.phase_index += 1;
        self.enter_current_phase();
    }

    fn enter_current_phase(&mut self) {
        let phase = self.phases[self.phase_index];
        if phase.is_timed() {
            self.status = Status::Running;
            self.remaining_ticks = phase.duration_ticks.unwrap_or(0);
        } else {
            self.status = Status::AwaitingInput;
            self.remaining_ticks = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn two_phase() -> Sequencer {
        Sequencer::new(vec![Phase::timed("countdown", 3), Phase::timed("active", 10)]).unwrap()
    }

    #[test]
    fn test_empty_phase_list_rejected() {
        assert_matches!(Sequencer::new(vec![]), Err(RiffError::Config(_)));
    }

    #[test]
    fn test_start_only_from_idle() {
        let mut seq = two_phase();
        assert_eq!(seq.status(), Status::Idle);

        seq.start();
        assert_eq!(seq.status(), Status::Running);
        assert_eq!(seq.remaining_ticks(), 3);

        seq.tick();
        seq.start(); // no-op while running
        assert_eq!(seq.remaining_ticks(), 2);
    }

    #[test]
    fn test_expiry_fires_on_zero_not_before() {
        let mut seq = two_phase();
        seq.start();

        assert_eq!(seq.tick(), None);
        assert_eq!(seq.tick(), None);
        let expiry = seq.tick().expect("third tick should expire countdown");
        assert_eq!(expiry.phase_index, 0);
        assert_eq!(expiry.name, "countdown");
        assert_eq!(seq.status(), Status::Running);
        assert_eq!(seq.remaining_ticks(), 10);
    }

    #[test]
    fn test_end_to_end_countdown_then_active() {
        let mut seq = two_phase();
        seq.start();

        for _ in 0..3 {
            seq.tick();
        }
        assert_eq!(seq.phase_index(), 1);

        let mut expiries = 0;
        for _ in 0..10 {
            if seq.tick().is_some() {
                expiries += 1;
            }
        }
        assert_eq!(expiries, 1);
        assert_eq!(seq.status(), Status::Complete);
    }

    #[test]
    fn test_all_timed_phases_produce_one_expiry_each() {
        let durations = [5u32, 1, 7, 2];
        let phases = durations
            .iter()
            .map(|&d| Phase::timed("p", d))
            .collect::<Vec<_>>();
        let mut seq = Sequencer::new(phases).unwrap();
        seq.start();

        let mut expiries = Vec::new();
        for _ in 0..durations.iter().sum::<u32>() {
            if let Some(e) = seq.tick() {
                expiries.push(e.phase_index);
            }
        }
        assert_eq!(expiries, vec![0, 1, 2, 3]);
        assert_eq!(seq.status(), Status::Complete);
    }

    #[test]
    fn test_gated_phase_waits_for_explicit_advance() {
        let mut seq = Sequencer::new(vec![
            Phase::timed("memorize", 2),
            Phase::gated("recall"),
            Phase::timed("memorize", 2),
        ])
        .unwrap();
        seq.start();

        seq.tick();
        seq.tick();
        assert_eq!(seq.status(), Status::AwaitingInput);
        assert_eq!(seq.phase_index(), 1);

        // Ticks do nothing while input-gated
        assert_eq!(seq.tick(), None);
        assert_eq!(seq.status(), Status::AwaitingInput);

        seq.advance_phase();
        assert_eq!(seq.status(), Status::Running);
        assert_eq!(seq.phase_index(), 2);
    }

    #[test]
    fn test_zero_duration_phase_is_input_gated() {
        let mut seq =
            Sequencer::new(vec![Phase::timed("pause", 0), Phase::timed("go", 1)]).unwrap();
        seq.start();
        assert_eq!(seq.status(), Status::AwaitingInput);
    }

    #[test]
    fn test_gated_first_phase_starts_awaiting() {
        let mut seq = Sequencer::new(vec![Phase::gated("setup")]).unwrap();
        seq.start();
        assert_eq!(seq.status(), Status::AwaitingInput);

        seq.advance_phase();
        assert_eq!(seq.status(), Status::Complete);
    }

    #[test]
    fn test_advance_is_noop_when_idle_or_complete() {
        let mut seq = two_phase();
        seq.advance_phase();
        assert_eq!(seq.status(), Status::Idle);

        seq.start();
        for _ in 0..13 {
            seq.tick();
        }
        assert_eq!(seq.status(), Status::Complete);
        seq.advance_phase();
        assert_eq!(seq.status(), Status::Complete);
    }

    #[test]
    fn test_reset_from_any_state() {
        let mut seq = two_phase();
        seq.start();
        seq.tick();
        seq.reset();
        assert_eq!(seq.status(), Status::Idle);
        assert_eq!(seq.phase_index(), 0);
        assert_eq!(seq.remaining_ticks(), 0);

        seq.start();
        for _ in 0..13 {
            seq.tick();
        }
        assert_eq!(seq.status(), Status::Complete);
        seq.reset();
        assert_eq!(seq.status(), Status::Idle);
        assert_eq!(seq.phase_index(), 0);
    }

    #[test]
    fn test_remaining_secs_rounds_up() {
        let mut seq = Sequencer::new(vec![Phase::timed("entry", secs(5))]).unwrap();
        seq.start();
        assert_eq!(seq.remaining_secs(), 5);
        seq.tick();
        assert_eq!(seq.remaining_secs(), 5);
        for _ in 0..9 {
            seq.tick();
        }
        assert_eq!(seq.remaining_secs(), 4);
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let mut seq = two_phase();
        let snap = seq.snapshot();
        assert_eq!(snap.status, Status::Idle);

        seq.start();
        seq.tick();
        let snap = seq.snapshot();
        assert_eq!(snap.status, Status::Running);
        assert_eq!(snap.phase_index, 0);
        assert_eq!(snap.name, "countdown");
        assert_eq!(snap.remaining_ticks, 2);
    }
}
