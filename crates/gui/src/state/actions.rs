//! Discrete editor actions: selection clicks, add/delete, undo/redo,
//! save/import/export.
//!
//! Every discrete mutating action brackets itself with a "Before X" and an
//! "X" history push, so undo can step back through the intermediate states.

use std::time::Instant;

use shared::{
    serialize_scene, EntityId, SceneFile, SceneFileError, SCENE_FORMAT_VERSION,
};

use super::history::Snapshot;
use super::EditorSession;
use crate::helpers::timestamp_ms;
use crate::viewport::gizmo::{GizmoMode, GizmoSpace};

impl EditorSession {
    // ── History ───────────────────────────────────────────────

    /// Capture the current state under a label
    pub fn push_history(&mut self, label: &str) {
        let snap = self.snapshot();
        self.history.push(label, snap, timestamp_ms());
    }

    /// Debounced capture for keystroke-level edits
    pub fn schedule_history(&mut self, label: &str, now: Instant) {
        self.history.schedule(label, now);
    }

    pub fn undo(&mut self) {
        if !self.history.can_undo() {
            return;
        }
        let current = self.snapshot();
        if let Some((label, snap)) = self.history.undo(current, timestamp_ms()) {
            self.apply_snapshot(snap);
            tracing::info!("undo: {label}");
            self.set_status(format!("Undo: {label}"));
        }
    }

    pub fn redo(&mut self) {
        if !self.history.can_redo() {
            return;
        }
        let current = self.snapshot();
        if let Some((label, snap)) = self.history.redo(current, timestamp_ms()) {
            self.apply_snapshot(snap);
            tracing::info!("redo: {label}");
            self.set_status(format!("Redo: {label}"));
        }
    }

    fn apply_snapshot(&mut self, snap: Snapshot) {
        self.scene.set_entities(snap.entities);
        self.selection.restore(snap.selected_ids, snap.last_clicked);
        self.refresh_views();
        self.autosave();
    }

    // ── Selection ─────────────────────────────────────────────

    /// Click on an entity row or scene shape, honoring modifiers:
    /// shift = range from the primary, ctrl = toggle, plain = single.
    pub fn click_entity(&mut self, id: &EntityId, shift: bool, ctrl: bool) {
        if shift && self.selection.last_clicked().is_some() {
            let from = self.selection.last_clicked().cloned().unwrap();
            self.selection.select_range(&from, id, &self.scene.entities);
        } else if ctrl {
            self.selection.toggle(id.clone());
        } else {
            self.selection.select_single(id.clone());
        }
        self.refresh_views();
        self.set_status("Selection changed");
    }

    /// Click on empty canvas: clears the selection unless a modifier is held.
    pub fn click_empty(&mut self, shift: bool, ctrl: bool) {
        if shift || ctrl {
            return;
        }
        self.selection.clear();
        self.refresh_views();
    }

    pub fn select_all(&mut self) {
        for id in self.scene.entities.iter().map(|e| e.id.clone()).collect::<Vec<_>>() {
            if !self.selection.is_selected(&id) {
                self.selection.toggle(id);
            }
        }
        self.refresh_views();
    }

    // ── Gizmo mode ────────────────────────────────────────────

    pub fn set_gizmo_mode(&mut self, mode: GizmoMode) {
        self.gizmo.mode = mode;
    }

    pub fn toggle_gizmo_space(&mut self) {
        self.gizmo.space = match self.gizmo.space {
            GizmoSpace::World => GizmoSpace::Local,
            GizmoSpace::Local => GizmoSpace::World,
        };
    }

    // ── Entity CRUD ───────────────────────────────────────────

    /// Create a new entity, select it, and bracket the action in history.
    pub fn add_entity(&mut self) -> EntityId {
        self.push_history("Before add entity");

        let id = self.scene.add_entity();
        self.selection.select_single(id.clone());

        self.refresh_views();
        self.autosave();
        self.push_history("Add entity");

        let name = self
            .scene
            .get_entity(&id)
            .map(|e| e.name.clone())
            .unwrap_or_default();
        self.set_status(format!("Created \"{name}\""));
        id
    }

    /// Delete every selected entity. Selection falls back to the first
    /// remaining entity. No-op when nothing is selected.
    pub fn delete_selected(&mut self) {
        if self.selection.is_empty() {
            return;
        }
        self.push_history("Before delete");

        let ids = self.selection.ids().to_vec();
        self.scene.remove_entities(&ids);

        match self.scene.first_id() {
            Some(first) => self.selection.select_single(first),
            None => self.selection.clear(),
        }

        self.refresh_views();
        self.autosave();
        self.push_history("Delete selected");
        self.set_status("Deleted selected");
    }

    // ── Persistence ───────────────────────────────────────────

    /// Current scene as a file payload with a fresh save stamp
    pub fn scene_file(&self) -> SceneFile {
        SceneFile {
            version: SCENE_FORMAT_VERSION,
            project_id: self.project_id().to_string(),
            saved_at: timestamp_ms(),
            entities: self.scene.entities.clone(),
        }
    }

    /// Serialize the scene for export
    pub fn export_scene_text(&self) -> String {
        serialize_scene(&self.scene_file())
    }

    /// Replace the scene from serialized text. Current state stays untouched
    /// unless the payload parses and validates completely.
    pub fn import_scene_text(&mut self, text: &str) -> Result<(), SceneFileError> {
        let file = shared::deserialize_scene(text)?;

        self.push_history("Before import");
        self.scene.set_entities(file.entities);
        match self.scene.first_id() {
            Some(first) => self.selection.select_single(first),
            None => self.selection.clear(),
        }

        self.autosave();
        self.push_history("Import scene");
        self.refresh_views();
        self.set_status("Imported");
        tracing::info!("imported scene ({} entities)", self.scene.len());
        Ok(())
    }

    /// Explicit save with user-visible result
    pub fn save_scene(&mut self) {
        let Some(store) = &self.store else {
            self.set_status("No local store available");
            return;
        };
        match store.save(&self.scene_key, &self.scene_file()) {
            Ok(()) => {
                tracing::info!("scene saved to local store");
                self.set_status("Saved (local)");
            }
            Err(e) => {
                tracing::error!("saving scene: {e}");
                self.set_status(format!("Save failed: {e}"));
            }
        }
    }

    /// Silent safety-net save after every mutation. Failures are logged and
    /// otherwise ignored; nothing blocks on this write.
    pub fn autosave(&self) {
        if let Some(store) = &self.store {
            if let Err(e) = store.save(&self.scene_key, &self.scene_file()) {
                tracing::warn!("autosave failed: {e}");
            }
        }
    }
}
