//! Hit-testing: entity picking and segment distance for gizmo handles

use glam::Vec2;
use shared::Entity;

/// Pick radius relative to an entity's scaled render size
const PICK_RADIUS_FACTOR: f32 = 0.7;

/// Projection-clamped distance from a point to a line segment.
pub fn point_segment_dist(p: egui::Pos2, a: egui::Pos2, b: egui::Pos2) -> f32 {
    let vx = b.x - a.x;
    let vy = b.y - a.y;
    let wx = p.x - a.x;
    let wy = p.y - a.y;

    let c1 = vx * wx + vy * wy;
    if c1 <= 0.0 {
        return (wx * wx + wy * wy).sqrt();
    }
    let c2 = vx * vx + vy * vy;
    if c2 <= c1 {
        return ((p.x - b.x).powi(2) + (p.y - b.y).powi(2)).sqrt();
    }

    let t = c1 / c2;
    let bx = a.x + t * vx;
    let by = a.y + t * vy;
    ((p.x - bx).powi(2) + (p.y - by).powi(2)).sqrt()
}

/// Nearest enabled entity under a world-space point, or None. Disabled
/// entities are never pickable.
pub fn pick_entity_at(world: Vec2, entities: &[Entity]) -> Option<&Entity> {
    let mut best: Option<(&Entity, f32)> = None;
    for ent in entities {
        if !ent.enabled {
            continue;
        }
        let pos = Vec2::new(ent.transform.x, ent.transform.y);
        let dist = (pos - world).length();
        let radius = ent.render.size * ent.transform.scale * PICK_RADIUS_FACTOR;
        if dist < radius && best.as_ref().is_none_or(|(_, d)| dist < *d) {
            best = Some((ent, dist));
        }
    }
    best.map(|(ent, _)| ent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::entity_at;

    #[test]
    fn test_segment_dist_perpendicular() {
        let d = point_segment_dist(
            egui::pos2(5.0, 3.0),
            egui::pos2(0.0, 0.0),
            egui::pos2(10.0, 0.0),
        );
        assert!((d - 3.0).abs() < 1e-5);
    }

    #[test]
    fn test_segment_dist_clamps_to_endpoints() {
        let a = egui::pos2(0.0, 0.0);
        let b = egui::pos2(10.0, 0.0);
        assert!((point_segment_dist(egui::pos2(-4.0, 3.0), a, b) - 5.0).abs() < 1e-5);
        assert!((point_segment_dist(egui::pos2(14.0, 3.0), a, b) - 5.0).abs() < 1e-5);
    }

    #[test]
    fn test_pick_nearest_entity() {
        let entities = vec![entity_at("a", 0.0, 0.0), entity_at("b", 15.0, 0.0)];
        let picked = pick_entity_at(Vec2::new(12.0, 0.0), &entities).unwrap();
        assert_eq!(picked.name, "b");
    }

    #[test]
    fn test_pick_misses_outside_radius() {
        // Default render size 30, scale 1 -> pick radius 21
        let entities = vec![entity_at("a", 0.0, 0.0)];
        assert!(pick_entity_at(Vec2::new(25.0, 0.0), &entities).is_none());
        assert!(pick_entity_at(Vec2::new(20.0, 0.0), &entities).is_some());
    }

    #[test]
    fn test_pick_skips_disabled() {
        let mut ent = entity_at("a", 0.0, 0.0);
        ent.enabled = false;
        assert!(pick_entity_at(Vec2::ZERO, &[ent]).is_none());
    }
}
