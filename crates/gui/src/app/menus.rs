//! Application menu bar

use eframe::egui;

use crate::state::EditorSession;
use crate::viewport::camera::Camera2D;

/// Show the file menu
pub fn file_menu(ui: &mut egui::Ui, session: &mut EditorSession) {
    ui.menu_button("File", |ui| {
        if ui.button("Save scene").clicked() {
            session.save_scene();
            ui.close_menu();
        }
        ui.separator();
        if ui.button("Export JSON...").clicked() {
            ui.close_menu();
            export_scene(session);
        }
        if ui.button("Import JSON...").clicked() {
            ui.close_menu();
            import_scene(session);
        }
        ui.separator();
        if ui.button("Quit").clicked() {
            std::process::exit(0);
        }
    });
}

/// Show the edit menu
pub fn edit_menu(ui: &mut egui::Ui, session: &mut EditorSession) {
    ui.menu_button("Edit", |ui| {
        let undo_label = match session.history.last_undo_label() {
            Some(label) => format!("Undo {label}"),
            None => "Undo".to_string(),
        };
        if ui
            .add_enabled(session.history.can_undo(), egui::Button::new(undo_label))
            .clicked()
        {
            session.undo();
            ui.close_menu();
        }
        if ui
            .add_enabled(session.history.can_redo(), egui::Button::new("Redo"))
            .clicked()
        {
            session.redo();
            ui.close_menu();
        }
        ui.separator();
        if ui
            .add_enabled(
                !session.selection.is_empty(),
                egui::Button::new("Delete selected"),
            )
            .clicked()
        {
            session.delete_selected();
            ui.close_menu();
        }
        if ui.button("Select all").clicked() {
            session.select_all();
            ui.close_menu();
        }
    });
}

/// Show the view menu
pub fn view_menu(ui: &mut egui::Ui, session: &mut EditorSession) {
    ui.menu_button("View", |ui| {
        ui.checkbox(&mut session.panels.hierarchy, "Hierarchy");
        ui.checkbox(&mut session.panels.inspector, "Inspector");
        ui.checkbox(&mut session.settings.grid.visible, "Grid");
        ui.separator();
        if ui.button("Reset camera").clicked() {
            session.camera = Camera2D::new();
            ui.close_menu();
        }
    });
}

fn export_scene(session: &mut EditorSession) {
    let Some(path) = rfd::FileDialog::new()
        .set_title("Export scene JSON")
        .add_filter("JSON", &["json"])
        .set_file_name(format!("{}.planarscene.json", session.project_id()))
        .save_file()
    else {
        return;
    };

    let json = session.export_scene_text();
    match std::fs::write(&path, json) {
        Ok(()) => {
            tracing::info!("exported scene to {}", path.display());
            session.set_status("Exported JSON");
        }
        Err(e) => {
            tracing::error!("failed to write scene: {e}");
            session.set_status(format!("Export failed: {e}"));
        }
    }
}

fn import_scene(session: &mut EditorSession) {
    let Some(path) = rfd::FileDialog::new()
        .set_title("Import scene JSON")
        .add_filter("JSON", &["json"])
        .pick_file()
    else {
        return;
    };

    let text = match std::fs::read_to_string(&path) {
        Ok(text) => text,
        Err(e) => {
            tracing::error!("failed to read {}: {e}", path.display());
            session.set_status("Import failed");
            return;
        }
    };

    if let Err(e) = session.import_scene_text(&text) {
        tracing::error!("failed to import scene: {e}");
        session.set_status(format!("Import failed: {e}"));
    }
}
