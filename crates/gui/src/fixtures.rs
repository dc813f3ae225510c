//! Scene builders shared by unit and integration tests.

use shared::{Entity, EntityTransform, RenderDescriptor, SceneFile, Shape, SCENE_FORMAT_VERSION};

/// Entity with a fresh uuid at a world position, default rect render.
pub fn entity_at(name: &str, x: f32, y: f32) -> Entity {
    Entity {
        id: uuid::Uuid::new_v4().to_string(),
        name: name.to_string(),
        tag: "Untagged".to_string(),
        enabled: true,
        transform: EntityTransform {
            x,
            y,
            rot: 0.0,
            scale: 1.0,
        },
        render: RenderDescriptor {
            shape: Shape::Rect,
            size: 30.0,
        },
    }
}

/// Entity with a fixed id, for tests that assert on identity.
pub fn entity_with_id(id: &str, x: f32, y: f32) -> Entity {
    let mut e = entity_at(id, x, y);
    e.id = id.to_string();
    e
}

/// Scene file wrapping the given entities.
pub fn scene_file(entities: Vec<Entity>) -> SceneFile {
    SceneFile {
        version: SCENE_FORMAT_VERSION,
        project_id: "test".to_string(),
        saved_at: 0,
        entities,
    }
}
