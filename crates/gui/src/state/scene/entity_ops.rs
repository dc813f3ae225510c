//! Entity CRUD operations

use shared::{Entity, EntityId, EntityTransform, RenderDescriptor, Shape};

use super::SceneState;

impl SceneState {
    /// Append a new entity with default transform and render, returning its
    /// id. Ids are uuids, unique for the lifetime of the scene.
    pub fn add_entity(&mut self) -> EntityId {
        let id = uuid::Uuid::new_v4().to_string();
        let n = self.entities.len() + 1;

        self.entities.push(Entity {
            id: id.clone(),
            name: format!("Entity {n}"),
            tag: "Untagged".to_string(),
            enabled: true,
            transform: EntityTransform::default(),
            render: RenderDescriptor {
                shape: Shape::Rect,
                size: 30.0,
            },
        });

        self.version += 1;
        id
    }

    /// Remove every entity whose id is in `ids`
    pub fn remove_entities(&mut self, ids: &[EntityId]) {
        self.entities.retain(|e| !ids.contains(&e.id));
        self.version += 1;
    }

    /// Replace all entities (load/import)
    pub fn set_entities(&mut self, entities: Vec<Entity>) {
        self.entities = entities;
        self.version += 1;
    }

    /// Seed the starter scene used when a project has no stored scene yet
    pub fn seed_default(&mut self) {
        let defaults = [
            ("Main Camera", "Camera", 0.0, 0.0, Shape::Cross, 24.0),
            ("Player", "Player", 120.0, 40.0, Shape::Rect, 40.0),
            ("Enemy", "Enemy", -140.0, -60.0, Shape::Circle, 34.0),
        ];

        for (name, tag, x, y, shape, size) in defaults {
            self.entities.push(Entity {
                id: uuid::Uuid::new_v4().to_string(),
                name: name.to_string(),
                tag: tag.to_string(),
                enabled: true,
                transform: EntityTransform {
                    x,
                    y,
                    rot: 0.0,
                    scale: 1.0,
                },
                render: RenderDescriptor { shape, size },
            });
        }

        self.version += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_entity_defaults() {
        let mut scene = SceneState::default();
        let id = scene.add_entity();
        let ent = scene.get_entity(&id).unwrap();
        assert_eq!(ent.name, "Entity 1");
        assert_eq!(ent.tag, "Untagged");
        assert!(ent.enabled);
        assert_eq!(ent.render.shape, Shape::Rect);
    }

    #[test]
    fn test_add_entity_ids_unique() {
        let mut scene = SceneState::default();
        let a = scene.add_entity();
        let b = scene.add_entity();
        assert_ne!(a, b);
    }

    #[test]
    fn test_remove_entities() {
        let mut scene = SceneState::default();
        let a = scene.add_entity();
        let b = scene.add_entity();
        scene.remove_entities(&[a.clone()]);
        assert!(scene.get_entity(&a).is_none());
        assert!(scene.get_entity(&b).is_some());
        assert_eq!(scene.len(), 1);
    }

    #[test]
    fn test_seed_default_scene() {
        let mut scene = SceneState::default();
        scene.seed_default();
        assert_eq!(scene.len(), 3);
        assert_eq!(scene.entities[0].name, "Main Camera");
        assert_eq!(scene.entities[1].render.shape, Shape::Rect);
    }

    #[test]
    fn test_version_increments() {
        let mut scene = SceneState::default();
        let v0 = scene.version();
        scene.add_entity();
        assert!(scene.version() > v0);
    }
}
