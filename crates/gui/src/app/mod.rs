//! Main application module

mod keyboard;
mod menus;
mod styles;

use std::time::Instant;

use eframe::egui;

use crate::state::scene::LocalStore;
use crate::state::EditorSession;
use crate::ui::{hierarchy, properties, status_bar, toolbar};
use crate::viewport::ViewportPanel;

/// Main application
pub struct EditorApp {
    session: EditorSession,
    viewport: ViewportPanel,
    hierarchy_search: String,
    /// Last applied font size (to detect changes)
    last_font_size: f32,
    /// Last scene version the settings were flushed at
    last_saved_version: u64,
}

impl EditorApp {
    pub fn new(cc: &eframe::CreationContext<'_>, project_id: &str) -> Self {
        let store = LocalStore::open_default();
        if store.is_none() {
            tracing::warn!("no platform data directory; scenes will not persist");
        }
        let session = EditorSession::new(project_id, store);

        styles::configure_styles(&cc.egui_ctx, session.settings.ui.font_size);

        let last_font_size = session.settings.ui.font_size;
        let last_saved_version = session.scene.version();

        Self {
            session,
            viewport: ViewportPanel::new(),
            hierarchy_search: String::new(),
            last_font_size,
            last_saved_version,
        }
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply font size if changed
        if self.session.settings.ui.font_size != self.last_font_size {
            styles::apply_font_size(ctx, self.session.settings.ui.font_size);
            self.last_font_size = self.session.settings.ui.font_size;
        }

        // Flush the debounced history slot
        self.session.tick(Instant::now());

        // Persist settings when the scene moved on
        let current_version = self.session.scene.version();
        if current_version != self.last_saved_version {
            self.session.settings.save();
            self.last_saved_version = current_version;
        }

        keyboard::handle_keyboard(ctx, &mut self.session);

        // The panels below redraw from live state each frame; the dirty
        // flags only tell us a repaint is worth requesting now.
        let hierarchy_dirty = self.session.views.take_hierarchy_dirty();
        let inspector_dirty = self.session.views.take_inspector_dirty();
        if hierarchy_dirty || inspector_dirty {
            ctx.request_repaint();
        }

        // ── Menu bar ──────────────────────────────────────────
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                menus::file_menu(ui, &mut self.session);
                menus::edit_menu(ui, &mut self.session);
                menus::view_menu(ui, &mut self.session);
            });
        });

        // ── Toolbar ───────────────────────────────────────────
        egui::TopBottomPanel::top("toolbar")
            .frame(
                egui::Frame::side_top_panel(&ctx.style())
                    .inner_margin(egui::Margin::symmetric(8, 4)),
            )
            .show(ctx, |ui| {
                toolbar::show(ui, &mut self.session);
            });

        // ── Status bar ────────────────────────────────────────
        egui::TopBottomPanel::bottom("status_bar")
            .exact_height(22.0)
            .frame(
                egui::Frame::side_top_panel(&ctx.style())
                    .inner_margin(egui::Margin::symmetric(8, 2)),
            )
            .show(ctx, |ui| {
                status_bar::show(ui, &self.session);
            });

        // ── Left panel: Hierarchy ─────────────────────────────
        if self.session.panels.hierarchy {
            egui::SidePanel::left("hierarchy")
                .default_width(240.0)
                .width_range(160.0..=420.0)
                .resizable(true)
                .frame(
                    egui::Frame::side_top_panel(&ctx.style()).inner_margin(egui::Margin::same(6)),
                )
                .show(ctx, |ui| {
                    hierarchy::show(ui, &mut self.session, &mut self.hierarchy_search);
                });
        }

        // ── Right panel: Inspector ────────────────────────────
        if self.session.panels.inspector {
            egui::SidePanel::right("inspector")
                .default_width(290.0)
                .width_range(200.0..=500.0)
                .resizable(true)
                .frame(
                    egui::Frame::side_top_panel(&ctx.style()).inner_margin(egui::Margin::same(6)),
                )
                .show(ctx, |ui| {
                    egui::ScrollArea::vertical()
                        .id_salt("inspector_scroll")
                        .show(ui, |ui| {
                            properties::show(ui, &mut self.session);
                        });
                });
        }

        // ── Central panel: canvas viewport ────────────────────
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                self.viewport.show(ui, &mut self.session);
            });
    }
}
