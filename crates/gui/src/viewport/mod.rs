//! 2D canvas viewport: input routing and painting

mod overlays;
pub use planar_gui_lib::viewport::{camera, gizmo, picking};

use eframe::egui::{self, Ui};

use crate::state::EditorSession;
use camera::{ZOOM_STEP_IN, ZOOM_STEP_OUT};

/// Canvas viewport panel
pub struct ViewportPanel;

impl ViewportPanel {
    pub fn new() -> Self {
        Self
    }

    pub fn show(&mut self, ui: &mut Ui, session: &mut EditorSession) {
        let (rect, response) =
            ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

        self.handle_zoom(ui, &response, rect, session);
        self.handle_gizmo_and_camera(&response, ui, rect, session);
        self.handle_selection(&response, ui, rect, session);

        if !ui.is_rect_visible(rect) {
            return;
        }

        let painter = ui.painter_at(rect);
        overlays::draw_background_grid(&painter, rect, session);
        overlays::draw_entities(&painter, rect, session);
        overlays::draw_gizmo(&painter, rect, session);
    }

    /// Wheel zoom towards the cursor, multiplicative per tick
    fn handle_zoom(
        &mut self,
        ui: &Ui,
        response: &egui::Response,
        rect: egui::Rect,
        session: &mut EditorSession,
    ) {
        let Some(pos) = response.hover_pos() else {
            return;
        };
        let scroll = ui.input(|i| i.smooth_scroll_delta.y);
        if scroll.abs() > 0.1 {
            let factor = if scroll > 0.0 {
                ZOOM_STEP_IN
            } else {
                ZOOM_STEP_OUT
            };
            session.camera.zoom_about(pos, rect, factor);
        }
    }

    fn handle_gizmo_and_camera(
        &mut self,
        response: &egui::Response,
        ui: &Ui,
        rect: egui::Rect,
        session: &mut EditorSession,
    ) {
        // ── Live drag handling ──────────────────────────────────
        if session.gizmo.is_dragging() {
            if response.dragged_by(egui::PointerButton::Primary) {
                if let Some(pos) = response.interact_pointer_pos() {
                    let snap_held = ui.input(|i| i.modifiers.ctrl);
                    session.update_gizmo_drag(pos, rect, snap_held);
                }
            }
            // End drag when button released
            if response.drag_stopped() || !response.dragged_by(egui::PointerButton::Primary) {
                session.end_gizmo_drag();
            }
            return;
        }

        // ── Camera pan: RMB drag, or space+LMB drag ────────────
        let space_down = ui.input(|i| i.key_down(egui::Key::Space));
        if response.dragged_by(egui::PointerButton::Secondary)
            || (response.dragged_by(egui::PointerButton::Primary) && space_down)
        {
            session.camera.pan(response.drag_delta());
            return;
        }

        // ── Gizmo drag start on LMB drag over a handle ─────────
        if response.drag_started_by(egui::PointerButton::Primary) && !space_down {
            let pointer_pos = response.interact_pointer_pos().or_else(|| response.hover_pos());
            if let Some(pos) = pointer_pos {
                if let Some(kind) = session.pick_gizmo_handle(pos, rect) {
                    session.begin_gizmo_drag(kind, pos);
                }
            }
        }
    }

    fn handle_selection(
        &mut self,
        response: &egui::Response,
        ui: &Ui,
        rect: egui::Rect,
        session: &mut EditorSession,
    ) {
        if !response.clicked() || session.gizmo.is_dragging() {
            return;
        }
        if ui.input(|i| i.key_down(egui::Key::Space)) {
            return;
        }
        let Some(pos) = response.interact_pointer_pos() else {
            return;
        };

        // A click over the gizmo belongs to the gizmo, never to picking
        if session.pick_gizmo_handle(pos, rect).is_some() {
            return;
        }

        let world = session.camera.screen_to_world(pos, rect);
        let picked = picking::pick_entity_at(world, &session.scene.entities).map(|e| e.id.clone());
        let mods = ui.input(|i| i.modifiers);

        match picked {
            Some(id) => {
                session.click_entity(&id, mods.shift, mods.command);
                session.set_status("Selected in scene");
            }
            None => session.click_empty(mods.shift, mods.command),
        }
    }
}

impl Default for ViewportPanel {
    fn default() -> Self {
        Self::new()
    }
}
