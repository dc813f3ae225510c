use glam::Vec2;
use shared::EntityId;

use super::camera::Camera2D;
use super::picking::point_segment_dist;

/// Axis arrow length in screen pixels
pub const AXIS_LENGTH: f32 = 70.0;
/// Rotate ring radius in screen pixels
pub const RING_RADIUS: f32 = 55.0;
/// Hit tolerance around handles, screen pixels
pub const HANDLE_TOLERANCE: f32 = 10.0;
/// Rotation snap increment in degrees when the snap modifier is held
pub const ROTATE_SNAP_DEG: f32 = 15.0;

/// Active manipulation mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GizmoMode {
    #[default]
    Move,
    Rotate,
}

/// Axis frame for constrained moves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GizmoSpace {
    #[default]
    World,
    Local,
}

/// Which handle a gesture grabbed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleKind {
    MoveX,
    MoveY,
    MoveFree,
    Rotate,
}

impl HandleKind {
    pub fn label(&self) -> &'static str {
        match self {
            HandleKind::MoveX => "move-x",
            HandleKind::MoveY => "move-y",
            HandleKind::MoveFree => "move-free",
            HandleKind::Rotate => "rotate",
        }
    }
}

/// Screen-space handle geometry, recomputed fresh each hit-test and draw
pub struct GizmoHandles {
    pub center: egui::Pos2,
    pub x_end: egui::Pos2,
    pub y_end: egui::Pos2,
    pub ring_radius: f32,
}

/// Local axis unit vectors for a rotation in degrees: X along (cos, sin) and
/// Y its perpendicular. Screen y points down, so these double as screen
/// directions.
pub fn local_axes(rot_deg: f32) -> (Vec2, Vec2) {
    let a = rot_deg.to_radians();
    (
        Vec2::new(a.cos(), a.sin()),
        Vec2::new(-a.sin(), a.cos()),
    )
}

/// Compute handle geometry around a world-space pivot. In local space both
/// axes follow the primary entity's rotation; the Y arrow is flipped so it
/// points visually up at zero rotation.
pub fn handles_screen(
    pivot: Vec2,
    primary_rot_deg: f32,
    space: GizmoSpace,
    camera: &Camera2D,
    rect: egui::Rect,
) -> GizmoHandles {
    let center = camera.world_to_screen(pivot, rect);

    let (ax, ay) = match space {
        GizmoSpace::World => (Vec2::new(1.0, 0.0), Vec2::new(0.0, -1.0)),
        GizmoSpace::Local => {
            let (ux, uy) = local_axes(primary_rot_deg);
            (ux, Vec2::new(uy.x, -uy.y))
        }
    };

    GizmoHandles {
        center,
        x_end: egui::pos2(center.x + ax.x * AXIS_LENGTH, center.y + ax.y * AXIS_LENGTH),
        y_end: egui::pos2(center.x + ay.x * AXIS_LENGTH, center.y + ay.y * AXIS_LENGTH),
        ring_radius: RING_RADIUS,
    }
}

/// Hit-test the handles at a screen position. Axis arrows are tested as
/// segments, the free handle as a small disk, the rotate ring as an annulus.
pub fn pick_handle(
    pointer: egui::Pos2,
    mode: GizmoMode,
    handles: &GizmoHandles,
) -> Option<HandleKind> {
    match mode {
        GizmoMode::Move => {
            let dx = point_segment_dist(pointer, handles.center, handles.x_end);
            if dx < HANDLE_TOLERANCE {
                return Some(HandleKind::MoveX);
            }
            let dy = point_segment_dist(pointer, handles.center, handles.y_end);
            if dy < HANDLE_TOLERANCE {
                return Some(HandleKind::MoveY);
            }
            if handles.center.distance(pointer) < HANDLE_TOLERANCE {
                return Some(HandleKind::MoveFree);
            }
            None
        }
        GizmoMode::Rotate => {
            let dist = handles.center.distance(pointer);
            if (dist - handles.ring_radius).abs() < HANDLE_TOLERANCE {
                Some(HandleKind::Rotate)
            } else {
                None
            }
        }
    }
}

/// Per-entity transform captured at drag start
#[derive(Debug, Clone)]
pub struct EntityStart {
    pub id: EntityId,
    pub pos: Vec2,
    pub rot: f32,
}

/// Ephemeral state of one drag gesture; created on pointer-down on a handle,
/// destroyed on pointer-up. Its lifetime brackets exactly one undoable
/// gesture.
#[derive(Debug, Clone)]
pub struct DragState {
    pub kind: HandleKind,
    pub start_pointer: egui::Pos2,
    pub pivot_start: Vec2,
    pub sel_start: Vec<EntityStart>,
    pub primary_rot_start: f32,
}

/// Gizmo mode/space plus the live drag, owned by the editor session
#[derive(Default)]
pub struct GizmoState {
    pub mode: GizmoMode,
    pub space: GizmoSpace,
    pub drag: Option<DragState>,
}

impl GizmoState {
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }
}

/// Translation to apply for a move drag given the raw world-space delta.
/// Axis-constrained moves in local space project the delta onto the primary
/// entity's axis, so a group drag moves every entity along that same axis.
pub fn move_vector(
    kind: HandleKind,
    space: GizmoSpace,
    delta: Vec2,
    primary_rot_deg: f32,
) -> Vec2 {
    match kind {
        HandleKind::MoveFree => delta,
        HandleKind::MoveX | HandleKind::MoveY => match space {
            GizmoSpace::World => {
                if kind == HandleKind::MoveX {
                    Vec2::new(delta.x, 0.0)
                } else {
                    Vec2::new(0.0, delta.y)
                }
            }
            GizmoSpace::Local => {
                let (ux, uy) = local_axes(primary_rot_deg);
                let axis = if kind == HandleKind::MoveX { ux } else { uy };
                axis * delta.dot(axis)
            }
        },
        HandleKind::Rotate => Vec2::ZERO,
    }
}

/// Signed rotation delta in degrees between the drag-start pointer and the
/// current pointer, measured around the pivot's screen position.
pub fn rotation_delta(
    pivot_screen: egui::Pos2,
    start_pointer: egui::Pos2,
    pointer: egui::Pos2,
    snap: bool,
) -> f32 {
    let a0 = (start_pointer.y - pivot_screen.y).atan2(start_pointer.x - pivot_screen.x);
    let a1 = (pointer.y - pivot_screen.y).atan2(pointer.x - pivot_screen.x);
    let mut delta = (a1 - a0).to_degrees();
    if snap {
        delta = (delta / ROTATE_SNAP_DEG).round() * ROTATE_SNAP_DEG;
    }
    delta
}

/// Rotate a point around a pivot by an angle in degrees.
pub fn rotate_point(p: Vec2, pivot: Vec2, deg: f32) -> Vec2 {
    let (s, c) = deg.to_radians().sin_cos();
    let rel = p - pivot;
    pivot + Vec2::new(rel.x * c - rel.y * s, rel.x * s + rel.y * c)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect() -> egui::Rect {
        egui::Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(800.0, 600.0))
    }

    #[test]
    fn test_local_axes_at_zero() {
        let (ux, uy) = local_axes(0.0);
        assert!((ux - Vec2::new(1.0, 0.0)).length() < 1e-6);
        assert!((uy - Vec2::new(0.0, 1.0)).length() < 1e-6);
    }

    #[test]
    fn test_local_axes_perpendicular() {
        for deg in [0.0, 30.0, 45.0, 133.7, -90.0] {
            let (ux, uy) = local_axes(deg);
            assert!(ux.dot(uy).abs() < 1e-6);
            assert!((ux.length() - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_move_vector_world_axes() {
        let delta = Vec2::new(10.0, -4.0);
        let mx = move_vector(HandleKind::MoveX, GizmoSpace::World, delta, 90.0);
        assert_eq!(mx, Vec2::new(10.0, 0.0));
        let my = move_vector(HandleKind::MoveY, GizmoSpace::World, delta, 90.0);
        assert_eq!(my, Vec2::new(0.0, -4.0));
    }

    #[test]
    fn test_move_vector_free_passes_through() {
        let delta = Vec2::new(10.0, -5.0);
        assert_eq!(
            move_vector(HandleKind::MoveFree, GizmoSpace::Local, delta, 42.0),
            delta
        );
    }

    #[test]
    fn test_move_vector_local_projects_on_primary_axis() {
        // Primary rotated 90 degrees: local X points along world +Y
        let delta = Vec2::new(3.0, 7.0);
        let mv = move_vector(HandleKind::MoveX, GizmoSpace::Local, delta, 90.0);
        assert!((mv.x - 0.0).abs() < 1e-5);
        assert!((mv.y - 7.0).abs() < 1e-5);
    }

    #[test]
    fn test_pick_handle_axis_and_free() {
        let handles = handles_screen(Vec2::ZERO, 0.0, GizmoSpace::World, &Camera2D::new(), rect());
        // Center is at (400, 300); X arrow extends to (470, 300)
        assert_eq!(
            pick_handle(egui::pos2(440.0, 303.0), GizmoMode::Move, &handles),
            Some(HandleKind::MoveX)
        );
        assert_eq!(
            pick_handle(egui::pos2(403.0, 260.0), GizmoMode::Move, &handles),
            Some(HandleKind::MoveY)
        );
        assert_eq!(
            pick_handle(egui::pos2(404.0, 304.0), GizmoMode::Move, &handles),
            Some(HandleKind::MoveX),
            "free handle overlaps the arrows near the center; arrows win"
        );
        assert_eq!(
            pick_handle(egui::pos2(500.0, 500.0), GizmoMode::Move, &handles),
            None
        );
    }

    #[test]
    fn test_pick_handle_ring_is_annulus() {
        let handles = handles_screen(Vec2::ZERO, 0.0, GizmoSpace::World, &Camera2D::new(), rect());
        // On the ring
        assert_eq!(
            pick_handle(egui::pos2(400.0 + RING_RADIUS, 300.0), GizmoMode::Rotate, &handles),
            Some(HandleKind::Rotate)
        );
        // Inside the disk but off the ring
        assert_eq!(
            pick_handle(egui::pos2(400.0, 300.0), GizmoMode::Rotate, &handles),
            None
        );
    }

    #[test]
    fn test_rotation_delta_quarter_turn() {
        let pivot = egui::pos2(100.0, 100.0);
        let d = rotation_delta(pivot, egui::pos2(150.0, 100.0), egui::pos2(100.0, 150.0), false);
        assert!((d - 90.0).abs() < 1e-4);
    }

    #[test]
    fn test_rotation_delta_snaps_to_15() {
        let pivot = egui::pos2(0.0, 0.0);
        let start = egui::pos2(100.0, 0.0);
        // ~37 degrees
        let pointer = egui::pos2(80.0, 60.0);
        let d = rotation_delta(pivot, start, pointer, true);
        assert_eq!(d % 15.0, 0.0);
    }

    #[test]
    fn test_rotate_point_preserves_pivot_distance() {
        let pivot = Vec2::new(50.0, 0.0);
        let p = Vec2::new(100.0, 0.0);
        for deg in [15.0, 90.0, -120.0, 360.0] {
            let rotated = rotate_point(p, pivot, deg);
            let before = (p - pivot).length();
            let after = (rotated - pivot).length();
            assert!((before - after).abs() < 1e-3, "deg {deg}");
        }
    }

    #[test]
    fn test_rotate_point_quarter_turn() {
        let rotated = rotate_point(Vec2::new(10.0, 0.0), Vec2::ZERO, 90.0);
        assert!((rotated - Vec2::new(0.0, 10.0)).length() < 1e-4);
    }
}
