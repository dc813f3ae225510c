//! Inspector edits: single-entity property writes applied to the primary.
//!
//! Each edit autosaves and schedules a debounced history entry, so a burst
//! of keystrokes coalesces into one undo step per pause.

use std::time::Instant;

use shared::{Entity, Shape, MIN_SCALE, MIN_SIZE};

use super::EditorSession;

/// Non-finite input falls back; everything else passes through
fn finite_or(v: f32, fallback: f32) -> f32 {
    if v.is_finite() {
        v
    } else {
        fallback
    }
}

/// Clamp to a minimum, treating non-finite input as the minimum
fn clamp_min(v: f32, min: f32) -> f32 {
    if v.is_finite() {
        v.max(min)
    } else {
        min
    }
}

impl EditorSession {
    /// Apply an edit to the primary entity, refresh views, autosave, and
    /// schedule a debounced history entry under the given label. No-op when
    /// nothing is selected.
    pub fn apply_to_primary(
        &mut self,
        label: &str,
        now: Instant,
        edit: impl FnOnce(&mut Entity),
    ) {
        let Some(id) = self.selection.primary_in(&self.scene.entities) else {
            return;
        };
        if let Some(ent) = self.scene.get_entity_mut(&id) {
            edit(ent);
        }
        self.scene.notify_mutated();
        self.refresh_views();
        self.autosave();
        self.schedule_history(label, now);
    }

    pub fn set_primary_name(&mut self, name: String, now: Instant) {
        self.apply_to_primary("Rename", now, |e| e.name = name);
    }

    pub fn set_primary_tag(&mut self, tag: String, now: Instant) {
        self.apply_to_primary("Change tag", now, |e| e.tag = tag);
    }

    pub fn set_primary_enabled(&mut self, enabled: bool, now: Instant) {
        self.apply_to_primary("Toggle enabled", now, |e| e.enabled = enabled);
    }

    pub fn set_primary_x(&mut self, x: f32, now: Instant) {
        self.apply_to_primary("Move", now, |e| e.transform.x = finite_or(x, 0.0));
    }

    pub fn set_primary_y(&mut self, y: f32, now: Instant) {
        self.apply_to_primary("Move", now, |e| e.transform.y = finite_or(y, 0.0));
    }

    pub fn set_primary_rotation(&mut self, rot: f32, now: Instant) {
        self.apply_to_primary("Rotate", now, |e| e.transform.rot = finite_or(rot, 0.0));
    }

    /// Scale is clamped to [`MIN_SCALE`]; zero, negative, and non-finite
    /// input all land on the minimum.
    pub fn set_primary_scale(&mut self, scale: f32, now: Instant) {
        self.apply_to_primary("Scale", now, |e| {
            e.transform.scale = clamp_min(scale, MIN_SCALE);
        });
    }

    pub fn set_primary_shape(&mut self, shape: Shape, now: Instant) {
        self.apply_to_primary("Change shape", now, |e| e.render.shape = shape);
    }

    /// Render size is clamped to [`MIN_SIZE`]
    pub fn set_primary_size(&mut self, size: f32, now: Instant) {
        self.apply_to_primary("Change size", now, |e| {
            e.render.size = clamp_min(size, MIN_SIZE);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::entity_with_id;

    fn session() -> EditorSession {
        EditorSession::with_scene("test", vec![entity_with_id("a", 0.0, 0.0)])
    }

    #[test]
    fn test_scale_clamped_to_minimum() {
        let mut s = session();
        let now = Instant::now();
        s.set_primary_scale(-3.0, now);
        assert_eq!(s.primary().unwrap().transform.scale, MIN_SCALE);
        s.set_primary_scale(f32::NAN, now);
        assert_eq!(s.primary().unwrap().transform.scale, MIN_SCALE);
        s.set_primary_scale(2.5, now);
        assert_eq!(s.primary().unwrap().transform.scale, 2.5);
    }

    #[test]
    fn test_size_clamped_to_minimum() {
        let mut s = session();
        let now = Instant::now();
        s.set_primary_size(0.0, now);
        assert_eq!(s.primary().unwrap().render.size, MIN_SIZE);
        s.set_primary_size(f32::INFINITY, now);
        assert_eq!(s.primary().unwrap().render.size, MIN_SIZE);
    }

    #[test]
    fn test_non_finite_position_falls_back() {
        let mut s = session();
        let now = Instant::now();
        s.set_primary_x(f32::NAN, now);
        assert_eq!(s.primary().unwrap().transform.x, 0.0);
        s.set_primary_x(17.5, now);
        assert_eq!(s.primary().unwrap().transform.x, 17.5);
    }

    #[test]
    fn test_edit_without_selection_is_noop() {
        let mut s = EditorSession::with_scene("test", Vec::new());
        s.set_primary_name("ghost".to_string(), Instant::now());
        assert!(s.primary().is_none());
    }

    #[test]
    fn test_edits_apply_to_primary_only() {
        let mut s = EditorSession::with_scene(
            "test",
            vec![entity_with_id("a", 0.0, 0.0), entity_with_id("b", 10.0, 0.0)],
        );
        s.click_entity(&"a".to_string(), false, false);
        s.click_entity(&"b".to_string(), false, true);
        // Both selected, "b" is primary
        s.set_primary_rotation(45.0, Instant::now());
        assert_eq!(s.scene.get_entity("b").unwrap().transform.rot, 45.0);
        assert_eq!(s.scene.get_entity("a").unwrap().transform.rot, 0.0);
    }
}
