//! Headless harness for programmatic scene editing.
//!
//! Drives a storeless [`EditorSession`] through the same operations the GUI
//! uses, including full gizmo drag gestures against a fixed viewport rect.

use egui::Pos2;
use glam::Vec2;
use shared::{Entity, EntityId};

use crate::fixtures::entity_at;
use crate::state::EditorSession;
use crate::viewport::gizmo::HandleKind;

/// Headless editor harness — an empty storeless session plus a fixed
/// 800x600 viewport.
pub struct EditorHarness {
    pub session: EditorSession,
}

impl EditorHarness {
    /// Empty scene, no persistence.
    pub fn new() -> Self {
        Self {
            session: EditorSession::with_scene("test", Vec::new()),
        }
    }

    /// Session seeded with the given entities.
    pub fn with_entities(entities: Vec<Entity>) -> Self {
        Self {
            session: EditorSession::with_scene("test", entities),
        }
    }

    /// The viewport rect all harness gestures assume
    pub fn rect() -> egui::Rect {
        egui::Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(800.0, 600.0))
    }

    // ── Scene setup ───────────────────────────────────────────

    /// Insert an entity directly (no history entry), returning its id. Used
    /// to arrange scenes before exercising the operation under test.
    pub fn spawn(&mut self, name: &str, x: f32, y: f32) -> EntityId {
        let ent = entity_at(name, x, y);
        let id = ent.id.clone();
        self.session.scene.entities.push(ent);
        self.session.scene.notify_mutated();
        id
    }

    // ── Selection ─────────────────────────────────────────────

    pub fn select(&mut self, id: &EntityId) {
        self.session.click_entity(id, false, false);
    }

    pub fn toggle(&mut self, id: &EntityId) {
        self.session.click_entity(id, false, true);
    }

    pub fn select_many(&mut self, ids: &[&EntityId]) {
        if let Some((first, rest)) = ids.split_first() {
            self.select(first);
            for id in rest {
                self.toggle(id);
            }
        }
    }

    // ── Gestures ──────────────────────────────────────────────

    /// Run a complete drag gesture: pointer-down on a handle, one move, and
    /// release.
    pub fn drag(&mut self, kind: HandleKind, from: Pos2, to: Pos2, snap_held: bool) {
        self.session.begin_gizmo_drag(kind, from);
        self.session.update_gizmo_drag(to, Self::rect(), snap_held);
        self.session.end_gizmo_drag();
    }

    /// Drag with intermediate pointer positions, as a real mouse produces.
    pub fn drag_path(&mut self, kind: HandleKind, path: &[Pos2], snap_held: bool) {
        let Some((first, rest)) = path.split_first() else {
            return;
        };
        self.session.begin_gizmo_drag(kind, *first);
        for p in rest {
            self.session.update_gizmo_drag(*p, Self::rect(), snap_held);
        }
        self.session.end_gizmo_drag();
    }

    /// Screen position of a world point under the harness camera
    pub fn screen(&self, world: Vec2) -> Pos2 {
        self.session.camera.world_to_screen(world, Self::rect())
    }

    // ── Inspection ────────────────────────────────────────────

    pub fn entity_count(&self) -> usize {
        self.session.scene.len()
    }

    pub fn position_of(&self, id: &str) -> (f32, f32) {
        let e = self.session.scene.get_entity(id).expect("entity exists");
        (e.transform.x, e.transform.y)
    }

    pub fn rotation_of(&self, id: &str) -> f32 {
        let e = self.session.scene.get_entity(id).expect("entity exists");
        e.transform.rot
    }

    pub fn undo_len(&self) -> usize {
        self.session.history.undo_len()
    }
}

impl Default for EditorHarness {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewport::gizmo::GizmoMode;

    #[test]
    fn test_new_harness_empty() {
        let h = EditorHarness::new();
        assert_eq!(h.entity_count(), 0);
        // Boot pushes the "Initial" entry
        assert_eq!(h.undo_len(), 1);
    }

    #[test]
    fn test_spawn_and_select() {
        let mut h = EditorHarness::new();
        let id = h.spawn("Box", 10.0, 20.0);
        h.select(&id);
        assert_eq!(h.session.primary().unwrap().id, id);
        assert_eq!(h.position_of(&id), (10.0, 20.0));
    }

    #[test]
    fn test_add_and_delete_via_session() {
        let mut h = EditorHarness::new();
        let id = h.session.add_entity();
        assert_eq!(h.entity_count(), 1);
        h.select(&id);
        h.session.delete_selected();
        assert_eq!(h.entity_count(), 0);
        assert!(h.session.selection.is_empty());
    }

    #[test]
    fn test_drag_moves_selection() {
        let mut h = EditorHarness::new();
        let id = h.spawn("Box", 0.0, 0.0);
        h.select(&id);
        let from = h.screen(Vec2::ZERO);
        let to = Pos2::new(from.x + 30.0, from.y);
        h.drag(HandleKind::MoveFree, from, to, false);
        assert_eq!(h.position_of(&id), (30.0, 0.0));
    }

    #[test]
    fn test_gizmo_mode_default_move() {
        let h = EditorHarness::new();
        assert_eq!(h.session.gizmo.mode, GizmoMode::Move);
    }
}
