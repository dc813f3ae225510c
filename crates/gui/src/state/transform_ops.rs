//! Gizmo drag orchestration: begin, update, and commit one gesture.
//!
//! All drag math derives from the transforms captured at pointer-down
//! (`DragState::sel_start`, `pivot_start`), never from already-mutated live
//! positions, so repeated pointer-move events cannot accumulate drift.

use glam::Vec2;

use super::EditorSession;
use crate::helpers::snap_to_grid;
use crate::state::view::ViewHooks;
use crate::viewport::gizmo::{self, DragState, EntityStart, GizmoHandles, HandleKind};

impl EditorSession {
    /// Handle geometry for the current selection, recomputed fresh from the
    /// live pivot and primary rotation. None when nothing is selected.
    pub fn gizmo_handles(&self, rect: egui::Rect) -> Option<GizmoHandles> {
        let pivot = self.selection_pivot()?;
        let rot = self.primary().map(|e| e.transform.rot).unwrap_or(0.0);
        Some(gizmo::handles_screen(
            pivot,
            rot,
            self.gizmo.space,
            &self.camera,
            rect,
        ))
    }

    /// Hit-test the gizmo handles at a screen position
    pub fn pick_gizmo_handle(&self, pointer: egui::Pos2, rect: egui::Rect) -> Option<HandleKind> {
        let handles = self.gizmo_handles(rect)?;
        gizmo::pick_handle(pointer, self.gizmo.mode, &handles)
    }

    /// Start a drag gesture on a handle: push the "before" history entry and
    /// capture start-of-gesture transforms for every selected entity. No-op
    /// when the selection is empty.
    pub fn begin_gizmo_drag(&mut self, kind: HandleKind, pointer: egui::Pos2) {
        let Some(pivot) = self.selection_pivot() else {
            return;
        };

        self.push_history(&format!("Before gizmo {}", kind.label()));

        let sel_start: Vec<EntityStart> = self
            .selected_entities()
            .iter()
            .map(|e| EntityStart {
                id: e.id.clone(),
                pos: Vec2::new(e.transform.x, e.transform.y),
                rot: e.transform.rot,
            })
            .collect();
        let primary_rot_start = self.primary().map(|e| e.transform.rot).unwrap_or(0.0);

        self.gizmo.drag = Some(DragState {
            kind,
            start_pointer: pointer,
            pivot_start: pivot,
            sel_start,
            primary_rot_start,
        });
        self.set_status(format!("Dragging: {}", kind.label()));
    }

    /// Apply pointer movement to the live drag. Zoom is read live, so a
    /// mid-drag zoom change rescales the world delta. Mutations autosave but
    /// push no history; the gesture owns its single undo step.
    pub fn update_gizmo_drag(&mut self, pointer: egui::Pos2, rect: egui::Rect, snap_held: bool) {
        let Some(drag) = self.gizmo.drag.clone() else {
            return;
        };
        if drag.sel_start.is_empty() {
            return;
        }

        match drag.kind {
            HandleKind::Rotate => self.update_rotate_drag(&drag, pointer, rect, snap_held),
            _ => self.update_move_drag(&drag, pointer, snap_held),
        }

        self.scene.notify_mutated();
        self.views.refresh_inspector();
        self.autosave();
    }

    fn update_move_drag(&mut self, drag: &DragState, pointer: egui::Pos2, snap_held: bool) {
        let delta = Vec2::new(
            pointer.x - drag.start_pointer.x,
            pointer.y - drag.start_pointer.y,
        ) / self.camera.zoom;

        // Group drags follow the primary's local axes, not each entity's own
        let primary_rot = self.primary().map(|e| e.transform.rot).unwrap_or(0.0);
        let mv = gizmo::move_vector(drag.kind, self.gizmo.space, delta, primary_rot);
        let grid = self.settings.grid.size;

        for start in &drag.sel_start {
            if let Some(ent) = self.scene.get_entity_mut(&start.id) {
                let mut nx = start.pos.x + mv.x;
                let mut ny = start.pos.y + mv.y;
                if snap_held {
                    nx = snap_to_grid(nx, grid);
                    ny = snap_to_grid(ny, grid);
                }
                ent.transform.x = nx;
                ent.transform.y = ny;
            }
        }
    }

    fn update_rotate_drag(
        &mut self,
        drag: &DragState,
        pointer: egui::Pos2,
        rect: egui::Rect,
        snap_held: bool,
    ) {
        let pivot_screen = self.camera.world_to_screen(drag.pivot_start, rect);
        let delta = gizmo::rotation_delta(pivot_screen, drag.start_pointer, pointer, snap_held);

        for start in &drag.sel_start {
            if let Some(ent) = self.scene.get_entity_mut(&start.id) {
                let p = gizmo::rotate_point(start.pos, drag.pivot_start, delta);
                ent.transform.x = p.x;
                ent.transform.y = p.y;
                ent.transform.rot = (start.rot + delta).round();
            }
        }
    }

    /// Commit the gesture: exactly one history entry per drag regardless of
    /// how many pointer-move events it saw.
    pub fn end_gizmo_drag(&mut self) {
        let Some(drag) = self.gizmo.drag.take() else {
            return;
        };
        let label = drag.kind.label();
        self.push_history(&format!("Gizmo {label}"));
        self.autosave();
        self.set_status(format!("Drag end: {label}"));
    }
}
