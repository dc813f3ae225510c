//! Inspector panel for the primary selected entity

use std::time::Instant;

use eframe::egui::{self, Ui};
use shared::Shape;

use crate::helpers::short_id;
use crate::state::EditorSession;

pub fn show(ui: &mut Ui, session: &mut EditorSession) {
    ui.heading("Inspector");
    ui.separator();

    let count = session.selection.count();
    if count == 0 {
        ui.add_space(10.0);
        ui.vertical_centered(|ui| {
            ui.weak("Select an entity");
            ui.weak("to edit its properties");
        });
        return;
    }

    if count > 1 {
        ui.weak(format!(
            "Multi-selection: {count} entities (edits apply to the primary)"
        ));
        ui.add_space(4.0);
    }

    // Copy primary values out to avoid borrow conflicts with the setters
    let Some(primary) = session.primary() else {
        ui.weak("Selected entity not found");
        return;
    };
    let id = primary.id.clone();
    let mut name = primary.name.clone();
    let mut tag = primary.tag.clone();
    let mut enabled = primary.enabled;
    let mut x = primary.transform.x;
    let mut y = primary.transform.y;
    let mut rot = primary.transform.rot;
    let mut scale = primary.transform.scale;
    let mut shape = primary.render.shape;
    let mut size = primary.render.size;

    let now = Instant::now();

    egui::CollapsingHeader::new("Entity")
        .id_salt("inspector_entity")
        .default_open(true)
        .show(ui, |ui| {
            egui::Grid::new("entity_props")
                .num_columns(2)
                .spacing([8.0, 4.0])
                .show(ui, |ui| {
                    ui.label("ID:");
                    ui.monospace(short_id(&id));
                    ui.end_row();

                    ui.label("Name:");
                    if ui.text_edit_singleline(&mut name).changed() {
                        session.set_primary_name(name.clone(), now);
                    }
                    ui.end_row();

                    ui.label("Tag:");
                    if ui.text_edit_singleline(&mut tag).changed() {
                        session.set_primary_tag(tag.clone(), now);
                    }
                    ui.end_row();

                    ui.label("Enabled:");
                    if ui.checkbox(&mut enabled, "").changed() {
                        session.set_primary_enabled(enabled, now);
                    }
                    ui.end_row();
                });
        });

    ui.add_space(8.0);
    egui::CollapsingHeader::new("Transform")
        .id_salt("inspector_transform")
        .default_open(true)
        .show(ui, |ui| {
            egui::Grid::new("transform_props")
                .num_columns(2)
                .spacing([8.0, 4.0])
                .show(ui, |ui| {
                    ui.label("X:");
                    if ui.add(egui::DragValue::new(&mut x).speed(1.0)).changed() {
                        session.set_primary_x(x, now);
                    }
                    ui.end_row();

                    ui.label("Y:");
                    if ui.add(egui::DragValue::new(&mut y).speed(1.0)).changed() {
                        session.set_primary_y(y, now);
                    }
                    ui.end_row();

                    ui.label("Rotation:");
                    if ui
                        .add(egui::DragValue::new(&mut rot).speed(1.0).suffix("°"))
                        .changed()
                    {
                        session.set_primary_rotation(rot, now);
                    }
                    ui.end_row();

                    ui.label("Scale:");
                    if ui
                        .add(egui::DragValue::new(&mut scale).speed(0.01))
                        .changed()
                    {
                        session.set_primary_scale(scale, now);
                    }
                    ui.end_row();
                });
        });

    ui.add_space(8.0);
    egui::CollapsingHeader::new("Render")
        .id_salt("inspector_render")
        .default_open(true)
        .show(ui, |ui| {
            egui::Grid::new("render_props")
                .num_columns(2)
                .spacing([8.0, 4.0])
                .show(ui, |ui| {
                    ui.label("Shape:");
                    egui::ComboBox::from_id_salt("shape_combo")
                        .selected_text(shape.display_name())
                        .show_ui(ui, |ui| {
                            for s in Shape::all() {
                                if ui
                                    .selectable_value(&mut shape, *s, s.display_name())
                                    .changed()
                                {
                                    session.set_primary_shape(shape, now);
                                }
                            }
                        });
                    ui.end_row();

                    ui.label("Size:");
                    if ui.add(egui::DragValue::new(&mut size).speed(1.0)).changed() {
                        session.set_primary_size(size, now);
                    }
                    ui.end_row();
                });
        });
}
