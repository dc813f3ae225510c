//! Keyboard shortcut handling

use eframe::egui;

use crate::state::EditorSession;
use crate::viewport::gizmo::GizmoMode;

/// Handle keyboard shortcuts for the application
pub fn handle_keyboard(ctx: &egui::Context, session: &mut EditorSession) {
    // Don't handle shortcuts when a text field is focused
    if ctx.memory(|m| m.focused().is_some()) {
        return;
    }

    ctx.input(|i| {
        // Ctrl+Z — undo
        if i.modifiers.command && i.key_pressed(egui::Key::Z) && !i.modifiers.shift {
            session.undo();
        }
        // Ctrl+Shift+Z or Ctrl+Y — redo
        if (i.modifiers.command && i.modifiers.shift && i.key_pressed(egui::Key::Z))
            || (i.modifiers.command && i.key_pressed(egui::Key::Y))
        {
            session.redo();
        }
        // W/E — gizmo mode, Q — axis space
        if i.key_pressed(egui::Key::W) && !i.modifiers.command {
            session.set_gizmo_mode(GizmoMode::Move);
        }
        if i.key_pressed(egui::Key::E) && !i.modifiers.command {
            session.set_gizmo_mode(GizmoMode::Rotate);
        }
        if i.key_pressed(egui::Key::Q) && !i.modifiers.command {
            session.toggle_gizmo_space();
        }
        // Delete — remove selected entities
        if i.key_pressed(egui::Key::Delete) {
            session.delete_selected();
        }
        // Escape — clear selection
        if i.key_pressed(egui::Key::Escape) && !session.gizmo.is_dragging() {
            session.click_empty(false, false);
        }
        // Ctrl+A — select all
        if i.modifiers.command && i.key_pressed(egui::Key::A) {
            session.select_all();
        }
        // Ctrl+S — save scene
        if i.modifiers.command && i.key_pressed(egui::Key::S) {
            session.save_scene();
        }
    });
}
