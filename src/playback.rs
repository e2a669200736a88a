use crate::effects::Note;
use std::time::Instant;

/// One recital keypress, stamped with its offset from recital start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordedNote {
    pub note: Note,
    pub offset_ms: u64,
}

/// Loops a recorded performance against a wall-clock reference.
///
/// `poll` emits every note whose offset has elapsed since the loop
/// started; a poll that arrives late emits all overdue notes at once
/// rather than producing negative waits. After the last note the loop
/// restarts from the current poll time, replaying the piece end over
/// end.
#[derive(Debug)]
pub struct LoopPlayer {
    notes: Vec<RecordedNote>,
    loop_start: Instant,
    next_index: usize,
}

impl LoopPlayer {
    pub fn new(notes: Vec<RecordedNote>, now: Instant) -> Self {
        Self {
            notes,
            loop_start: now,
            next_index: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Notes due at `now`. Empty recordings never emit and never loop.
    pub fn poll(&mut self, now: Instant) -> Vec<RecordedNote> {
        if self.notes.is_empty() {
            return Vec::new();
        }

        let elapsed_ms = now.duration_since(self.loop_start).as_millis() as u64;
        let mut due = Vec::new();
        while self.next_index < self.notes.len() && self.notes[self.next_index].offset_ms <= elapsed_ms
        {
            due.push(self.notes[self.next_index]);
            self.next_index += 1;
        }

        if self.next_index >= self.notes.len() {
            // Re-anchor the clock; drift from late polls does not accumulate
            // across loop iterations.
            self.loop_start = now;
            self.next_index = 0;
        }

        due
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn recording() -> Vec<RecordedNote> {
        vec![
            RecordedNote {
                note: Note::A4,
                offset_ms: 0,
            },
            RecordedNote {
                note: Note::C5,
                offset_ms: 100,
            },
            RecordedNote {
                note: Note::E5,
                offset_ms: 350,
            },
        ]
    }

    #[test]
    fn test_notes_emit_in_offset_order() {
        let start = Instant::now();
        let mut player = LoopPlayer::new(recording(), start);

        let due = player.poll(start + Duration::from_millis(50));
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].note, Note::A4);

        let due = player.poll(start + Duration::from_millis(120));
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].note, Note::C5);
    }

    #[test]
    fn test_late_poll_emits_all_overdue_notes() {
        let start = Instant::now();
        let mut player = LoopPlayer::new(recording(), start);

        // A poll arriving well past every offset plays everything
        // immediately instead of waiting a negative delay.
        let due = player.poll(start + Duration::from_millis(5000));
        assert_eq!(
            due.iter().map(|n| n.note).collect::<Vec<_>>(),
            vec![Note::A4, Note::C5, Note::E5]
        );
    }

    #[test]
    fn test_loop_restarts_after_last_note() {
        let start = Instant::now();
        let mut player = LoopPlayer::new(recording(), start);

        let t1 = start + Duration::from_millis(400);
        assert_eq!(player.poll(t1).len(), 3);

        // The clock re-anchored at t1: the zero-offset note is due again.
        let due = player.poll(t1 + Duration::from_millis(10));
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].note, Note::A4);
    }

    #[test]
    fn test_empty_recording_never_emits() {
        let start = Instant::now();
        let mut player = LoopPlayer::new(Vec::new(), start);
        assert!(player.is_empty());
        assert!(player.poll(start + Duration::from_secs(10)).is_empty());
    }
}
