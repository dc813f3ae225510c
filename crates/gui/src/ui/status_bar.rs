use eframe::egui::{self, Ui};

use crate::state::EditorSession;
use crate::viewport::gizmo::{GizmoMode, GizmoSpace};

pub fn show(ui: &mut Ui, session: &EditorSession) {
    ui.horizontal(|ui| {
        ui.weak(format!("Zoom: {}%", (session.camera.zoom * 100.0).round()));
        ui.separator();
        ui.weak(format!(
            "Cam: {}, {}",
            session.camera.x.round(),
            session.camera.y.round()
        ));
        ui.separator();

        let sel = session.selected_entities();
        match sel.len() {
            0 => ui.weak("Selected: —"),
            1 => ui.weak(format!("Selected: {}", sel[0].name)),
            n => ui.weak(format!("Selected: {n} entities")),
        };
        ui.separator();

        let mode = match session.gizmo.mode {
            GizmoMode::Move => "Move",
            GizmoMode::Rotate => "Rotate",
        };
        let space = match session.gizmo.space {
            GizmoSpace::World => "World",
            GizmoSpace::Local => "Local",
        };
        ui.weak(format!("Gizmo: {mode} · {space}"));
        ui.separator();
        ui.weak(format!("Snap: {}", session.settings.grid.size));
        ui.separator();
        ui.label(format!("Status: {}", session.status()));

        // Right-aligned version
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.weak("Planar v0.1");
        });
    });
}
