//! Main toolbar: gizmo mode, axis space, grid size, entity actions

use eframe::egui::{self, Ui};

use crate::state::settings::GridSettings;
use crate::state::EditorSession;
use crate::viewport::gizmo::{GizmoMode, GizmoSpace};

pub fn show(ui: &mut Ui, session: &mut EditorSession) {
    ui.horizontal(|ui| {
        // ── Gizmo mode ────────────────────────────────────────
        if ui
            .selectable_label(session.gizmo.mode == GizmoMode::Move, "Move (W)")
            .clicked()
        {
            session.set_gizmo_mode(GizmoMode::Move);
        }
        if ui
            .selectable_label(session.gizmo.mode == GizmoMode::Rotate, "Rotate (E)")
            .clicked()
        {
            session.set_gizmo_mode(GizmoMode::Rotate);
        }

        let space_label = match session.gizmo.space {
            GizmoSpace::World => "World",
            GizmoSpace::Local => "Local",
        };
        if ui
            .button(space_label)
            .on_hover_text("Toggle gizmo axis space (Q)")
            .clicked()
        {
            session.toggle_gizmo_space();
        }

        ui.separator();

        // ── Grid size ─────────────────────────────────────────
        ui.label("Grid:");
        let mut grid = session.settings.grid.size;
        egui::ComboBox::from_id_salt("grid_size")
            .selected_text(format!("{grid}"))
            .width(60.0)
            .show_ui(ui, |ui| {
                for &opt in GridSettings::size_options() {
                    ui.selectable_value(&mut grid, opt, format!("{opt}"));
                }
            });
        if grid != session.settings.grid.size {
            session.settings.grid.size = grid;
            session.settings.save();
            session.set_status(format!("Grid: {grid}"));
        }
        ui.weak("(hold Ctrl to snap)");

        ui.separator();

        // ── Entity actions ────────────────────────────────────
        if ui.button("➕ Add").clicked() {
            session.add_entity();
        }
        if ui
            .add_enabled(!session.selection.is_empty(), egui::Button::new("🗑 Delete"))
            .clicked()
        {
            session.delete_selected();
        }

        ui.separator();

        if ui.button("💾 Save").clicked() {
            session.save_scene();
        }
    });
}
