//! Hierarchy panel - entity list with search and multi-select

use eframe::egui::{self, Ui};

use crate::state::EditorSession;

pub fn show(ui: &mut Ui, session: &mut EditorSession, search: &mut String) {
    // Header with entity count and Add button
    ui.horizontal(|ui| {
        ui.heading("Hierarchy");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.small_button("➕").on_hover_text("Add entity").clicked() {
                session.add_entity();
            }
            ui.weak(format!("({})", session.scene.len()));
        });
    });

    ui.add(
        egui::TextEdit::singleline(search)
            .hint_text("Search...")
            .desired_width(f32::INFINITY),
    );
    ui.separator();

    if session.scene.is_empty() {
        ui.add_space(20.0);
        ui.vertical_centered(|ui| {
            ui.weak("No entities");
            ui.add_space(4.0);
            if ui.button("Add entity").clicked() {
                session.add_entity();
            }
        });
        return;
    }

    // Collect row info to avoid borrow conflicts with the click handling
    let query = search.trim().to_lowercase();
    let rows: Vec<_> = session
        .scene
        .entities
        .iter()
        .filter(|e| {
            query.is_empty()
                || e.name.to_lowercase().contains(&query)
                || e.tag.to_lowercase().contains(&query)
        })
        .map(|e| {
            (
                e.id.clone(),
                e.name.clone(),
                e.tag.clone(),
                e.enabled,
                session.selection.is_selected(&e.id),
            )
        })
        .collect();

    egui::ScrollArea::vertical()
        .id_salt("hierarchy_scroll")
        .show(ui, |ui| {
            for (id, name, tag, enabled, selected) in &rows {
                let tag_label = if tag.is_empty() { "Untagged" } else { tag };
                let text = format!("{name}  [{tag_label}]");

                let response = ui.horizontal(|ui| {
                    let r = ui.selectable_label(*selected, text);
                    ui.with_layout(
                        egui::Layout::right_to_left(egui::Align::Center),
                        |ui| {
                            ui.weak(if *enabled { "On" } else { "Off" });
                        },
                    );
                    r
                })
                .inner;

                if response.clicked() {
                    let mods = ui.input(|i| i.modifiers);
                    session.click_entity(id, mods.shift, mods.command);
                }

                response.context_menu(|ui| {
                    if ui
                        .button(
                            egui::RichText::new("Delete")
                                .color(egui::Color32::from_rgb(220, 80, 80)),
                        )
                        .clicked()
                    {
                        if !session.selection.is_selected(id) {
                            session.click_entity(id, false, false);
                        }
                        session.delete_selected();
                        ui.close_menu();
                    }
                });
            }
        });
}
