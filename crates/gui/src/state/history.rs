//! Snapshot-based undo/redo with a debounced coalescing slot.
//!
//! Continuous gestures (drags, keystroke bursts in the inspector) collapse
//! into single undo steps: drags bracket themselves with explicit pushes,
//! inspector edits go through the single-slot debounce.

use std::time::{Duration, Instant};

use shared::{Entity, EntityId};

/// Maximum retained undo entries; the oldest is evicted beyond this
pub const HISTORY_LIMIT: usize = 80;

/// Idle delay before a scheduled push fires
pub const DEBOUNCE_DELAY: Duration = Duration::from_millis(250);

/// Deep copy of everything undo must restore
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub entities: Vec<Entity>,
    pub selected_ids: Vec<EntityId>,
    pub last_clicked: Option<EntityId>,
}

/// One undoable state, tagged with the action that produced it
#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub label: String,
    pub snap: Snapshot,
    /// Unix ms timestamp of the push
    pub at: i64,
}

/// Debounced push waiting for its deadline. One slot at most; rescheduling
/// replaces it.
struct PendingPush {
    label: String,
    deadline: Instant,
}

#[derive(Default)]
pub struct History {
    undo: Vec<HistoryEntry>,
    redo: Vec<HistoryEntry>,
    pending: Option<PendingPush>,
}

impl History {
    /// Push a snapshot onto the undo stack. Clears the redo stack and evicts
    /// the oldest entry past [`HISTORY_LIMIT`].
    pub fn push(&mut self, label: impl Into<String>, snap: Snapshot, at: i64) {
        self.undo.push(HistoryEntry {
            label: label.into(),
            snap,
            at,
        });
        if self.undo.len() > HISTORY_LIMIT {
            self.undo.remove(0);
        }
        self.redo.clear();
    }

    /// Restart the debounce slot. Only the last label of a burst is pushed,
    /// with the snapshot taken at fire time.
    pub fn schedule(&mut self, label: impl Into<String>, now: Instant) {
        self.pending = Some(PendingPush {
            label: label.into(),
            deadline: now + DEBOUNCE_DELAY,
        });
    }

    /// Take the pending label once its deadline has passed. The caller
    /// follows up with [`History::push`] using a snapshot of current state.
    pub fn poll_pending(&mut self, now: Instant) -> Option<String> {
        if self.pending.as_ref().is_some_and(|p| now >= p.deadline) {
            self.pending.take().map(|p| p.label)
        } else {
            None
        }
    }

    /// Pop the latest undo entry, parking the current state on the redo stack
    /// under the popped label. Returns the label and the snapshot to apply;
    /// None when the stack is empty.
    pub fn undo(&mut self, current: Snapshot, at: i64) -> Option<(String, Snapshot)> {
        let last = self.undo.pop()?;
        self.redo.push(HistoryEntry {
            label: last.label.clone(),
            snap: current,
            at,
        });
        Some((last.label, last.snap))
    }

    /// Mirror of [`History::undo`] from the redo stack.
    pub fn redo(&mut self, current: Snapshot, at: i64) -> Option<(String, Snapshot)> {
        let next = self.redo.pop()?;
        self.undo.push(HistoryEntry {
            label: next.label.clone(),
            snap: current,
            at,
        });
        Some((next.label, next.snap))
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    pub fn undo_len(&self) -> usize {
        self.undo.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo.len()
    }

    /// Label of the entry the next undo would apply (for menu items)
    pub fn last_undo_label(&self) -> Option<&str> {
        self.undo.last().map(|e| e.label.as_str())
    }

    /// Oldest retained undo label (eviction order checks)
    pub fn oldest_undo_label(&self) -> Option<&str> {
        self.undo.first().map(|e| e.label.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snap(n: usize) -> Snapshot {
        Snapshot {
            entities: Vec::new(),
            selected_ids: vec![format!("id{n}")],
            last_clicked: None,
        }
    }

    #[test]
    fn test_push_and_undo() {
        let mut h = History::default();
        h.push("First", snap(1), 0);
        let (label, restored) = h.undo(snap(99), 1).unwrap();
        assert_eq!(label, "First");
        assert_eq!(restored, snap(1));
        assert!(h.can_redo());
    }

    #[test]
    fn test_undo_underflow_is_noop() {
        let mut h = History::default();
        assert!(h.undo(snap(0), 0).is_none());
        assert!(h.redo(snap(0), 0).is_none());
    }

    #[test]
    fn test_redo_round_trip() {
        let mut h = History::default();
        h.push("Edit", snap(1), 0);
        let (_, old) = h.undo(snap(2), 1).unwrap();
        assert_eq!(old, snap(1));
        let (label, new) = h.redo(old, 2).unwrap();
        assert_eq!(label, "Edit");
        assert_eq!(new, snap(2));
        assert!(h.can_undo());
        assert!(!h.can_redo());
    }

    #[test]
    fn test_push_clears_redo() {
        let mut h = History::default();
        h.push("A", snap(1), 0);
        h.undo(snap(2), 1);
        assert!(h.can_redo());
        h.push("B", snap(3), 2);
        assert!(!h.can_redo());
    }

    #[test]
    fn test_bounded_evicts_oldest_first() {
        let mut h = History::default();
        for i in 0..HISTORY_LIMIT + 25 {
            h.push(format!("entry {i}"), snap(i), i as i64);
        }
        assert_eq!(h.undo_len(), HISTORY_LIMIT);
        assert_eq!(h.oldest_undo_label(), Some("entry 25"));
        assert_eq!(
            h.last_undo_label(),
            Some(format!("entry {}", HISTORY_LIMIT + 24).as_str())
        );
    }

    #[test]
    fn test_debounce_coalesces_burst() {
        let mut h = History::default();
        let t0 = Instant::now();
        h.schedule("Rename", t0);
        h.schedule("Rename", t0 + Duration::from_millis(100));
        h.schedule("Change tag", t0 + Duration::from_millis(200));

        // Not yet due relative to the last schedule
        assert!(h.poll_pending(t0 + Duration::from_millis(300)).is_none());
        // Due: only the final label fires
        let fired = h.poll_pending(t0 + Duration::from_millis(460)).unwrap();
        assert_eq!(fired, "Change tag");
        // Slot is consumed
        assert!(h.poll_pending(t0 + Duration::from_millis(999)).is_none());
    }
}
