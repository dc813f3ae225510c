//! Canvas painting: background grid, entities, selection rings, gizmo

use eframe::egui::{self, Color32, Painter, Pos2, Stroke};
use glam::Vec2;
use shared::Shape;

use super::gizmo::GizmoMode;
use crate::state::EditorSession;

fn color3(rgb: [u8; 3]) -> Color32 {
    Color32::from_rgb(rgb[0], rgb[1], rgb[2])
}

/// Fill the canvas and draw grid lines plus the world axes
pub fn draw_background_grid(painter: &Painter, rect: egui::Rect, session: &EditorSession) {
    painter.rect_filled(rect, 0.0, color3(session.settings.viewport.background_color));

    if !session.settings.grid.visible {
        return;
    }

    let cam = &session.camera;
    let grid = session.settings.grid.size;

    let top_left = cam.screen_to_world(rect.min, rect);
    let bottom_right = cam.screen_to_world(rect.max, rect);

    let start_x = (top_left.x / grid).floor() * grid;
    let end_x = bottom_right.x;
    let start_y = (top_left.y / grid).floor() * grid;
    let end_y = bottom_right.y;

    let grid_stroke = Stroke::new(1.0, color3(session.settings.viewport.grid_color));

    let mut x = start_x;
    while x <= end_x {
        let a = cam.world_to_screen(Vec2::new(x, top_left.y), rect);
        let b = cam.world_to_screen(Vec2::new(x, bottom_right.y), rect);
        painter.line_segment([a, b], grid_stroke);
        x += grid;
    }
    let mut y = start_y;
    while y <= end_y {
        let a = cam.world_to_screen(Vec2::new(top_left.x, y), rect);
        let b = cam.world_to_screen(Vec2::new(bottom_right.x, y), rect);
        painter.line_segment([a, b], grid_stroke);
        y += grid;
    }

    // World axes
    let axis_stroke = Stroke::new(1.5, Color32::from_rgb(63, 91, 255));
    let a = cam.world_to_screen(Vec2::new(0.0, top_left.y), rect);
    let b = cam.world_to_screen(Vec2::new(0.0, bottom_right.y), rect);
    painter.line_segment([a, b], axis_stroke);
    let a = cam.world_to_screen(Vec2::new(top_left.x, 0.0), rect);
    let b = cam.world_to_screen(Vec2::new(bottom_right.x, 0.0), rect);
    painter.line_segment([a, b], axis_stroke);
}

/// Draw every enabled entity, plus selection rings
pub fn draw_entities(painter: &Painter, rect: egui::Rect, session: &EditorSession) {
    let cam = &session.camera;
    let fill = Color32::from_white_alpha(15);
    let outline = Stroke::new(2.0, Color32::from_white_alpha(51));
    let selection = Stroke::new(2.5, color3(session.settings.viewport.selection_color));

    for ent in &session.scene.entities {
        if !ent.enabled {
            continue;
        }

        let center = cam.world_to_screen(Vec2::new(ent.transform.x, ent.transform.y), rect);
        let size_px = ent.render.size * ent.transform.scale * cam.zoom;
        let half = size_px / 2.0;
        let rot = ent.transform.rot;

        match ent.render.shape {
            Shape::Rect => {
                let corners = [
                    rotated_offset(center, -half, -half, rot),
                    rotated_offset(center, half, -half, rot),
                    rotated_offset(center, half, half, rot),
                    rotated_offset(center, -half, half, rot),
                ];
                painter.add(egui::Shape::convex_polygon(corners.to_vec(), fill, outline));
            }
            Shape::Circle => {
                painter.circle(center, half, fill, outline);
            }
            Shape::Cross => {
                painter.line_segment(
                    [
                        rotated_offset(center, -half, 0.0, rot),
                        rotated_offset(center, half, 0.0, rot),
                    ],
                    outline,
                );
                painter.line_segment(
                    [
                        rotated_offset(center, 0.0, -half, rot),
                        rotated_offset(center, 0.0, half, rot),
                    ],
                    outline,
                );
            }
        }

        if session.selection.is_selected(&ent.id) {
            painter.circle_stroke(center, size_px * 0.7, selection);
        }
    }
}

/// Draw the move arrows or the rotate ring for the current selection
pub fn draw_gizmo(painter: &Painter, rect: egui::Rect, session: &EditorSession) {
    let Some(handles) = session.gizmo_handles(rect) else {
        return;
    };

    match session.gizmo.mode {
        GizmoMode::Move => {
            draw_arrow(
                painter,
                handles.center,
                handles.x_end,
                Color32::from_rgb(255, 80, 80),
            );
            draw_arrow(
                painter,
                handles.center,
                handles.y_end,
                Color32::from_rgb(80, 255, 120),
            );
            painter.circle_filled(handles.center, 3.0, Color32::from_white_alpha(230));
        }
        GizmoMode::Rotate => {
            painter.circle_stroke(
                handles.center,
                handles.ring_radius,
                Stroke::new(3.0, color3(session.settings.viewport.selection_color)),
            );
        }
    }
}

fn rotated_offset(center: Pos2, dx: f32, dy: f32, rot_deg: f32) -> Pos2 {
    let (s, c) = rot_deg.to_radians().sin_cos();
    Pos2::new(center.x + dx * c - dy * s, center.y + dx * s + dy * c)
}

fn draw_arrow(painter: &Painter, from: Pos2, to: Pos2, color: Color32) {
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    let len = (dx * dx + dy * dy).sqrt();
    if len < 0.001 {
        return;
    }

    let ux = dx / len;
    let uy = dy / len;
    let px = -uy;
    let py = ux;

    painter.line_segment([from, to], Stroke::new(3.0, color));

    let head_len = 12.0;
    let head_wid = 6.0;
    let head = vec![
        to,
        Pos2::new(
            to.x - ux * head_len + px * head_wid,
            to.y - uy * head_len + py * head_wid,
        ),
        Pos2::new(
            to.x - ux * head_len - px * head_wid,
            to.y - uy * head_len - py * head_wid,
        ),
    ];
    painter.add(egui::Shape::convex_polygon(head, color, Stroke::NONE));
}
