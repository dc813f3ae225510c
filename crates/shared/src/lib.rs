//! Scene data model shared between the editor library and binary.
//!
//! The types here mirror the on-disk scene file format exactly; everything
//! else (selection, history, camera) lives in the gui crate and is never
//! serialized.

use serde::{Deserialize, Serialize};

/// Unique identifier of an entity in a scene
pub type EntityId = String;

/// Current scene file format version
pub const SCENE_FORMAT_VERSION: u32 = 1;

/// Smallest allowed uniform scale; writes below this are clamped
pub const MIN_SCALE: f32 = 0.01;

/// Smallest allowed render size in world units; writes below this are clamped
pub const MIN_SIZE: f32 = 1.0;

/// Shape of an entity's render primitive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Shape {
    Rect,
    Circle,
    Cross,
}

impl Shape {
    /// Display name for UI labels
    pub fn display_name(&self) -> &'static str {
        match self {
            Shape::Rect => "Rect",
            Shape::Circle => "Circle",
            Shape::Cross => "Cross",
        }
    }

    /// All shapes, for combo boxes
    pub fn all() -> &'static [Shape] {
        &[Shape::Rect, Shape::Circle, Shape::Cross]
    }
}

/// 2D transform: position in world units, rotation in degrees, uniform scale
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityTransform {
    pub x: f32,
    pub y: f32,
    pub rot: f32,
    pub scale: f32,
}

impl Default for EntityTransform {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            rot: 0.0,
            scale: 1.0,
        }
    }
}

/// How an entity is drawn in the viewport
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderDescriptor {
    pub shape: Shape,
    pub size: f32,
}

impl Default for RenderDescriptor {
    fn default() -> Self {
        Self {
            shape: Shape::Rect,
            size: 30.0,
        }
    }
}

/// A scene object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub id: EntityId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub tag: String,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    pub transform: EntityTransform,
    pub render: RenderDescriptor,
}

fn default_enabled() -> bool {
    true
}

/// Serialized scene: format version, owning project, save timestamp, entities
/// in insertion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SceneFile {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default, rename = "projectId")]
    pub project_id: String,
    /// Unix timestamp in milliseconds of the last save
    #[serde(default, rename = "savedAt")]
    pub saved_at: i64,
    pub entities: Vec<Entity>,
}

fn default_version() -> u32 {
    SCENE_FORMAT_VERSION
}

/// Scene file parse/validation failure
#[derive(Debug, thiserror::Error)]
pub enum SceneFileError {
    #[error("invalid scene JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid scene file: no entities array")]
    MissingEntities,
}

/// Serialize a scene to pretty JSON for export and storage.
pub fn serialize_scene(scene: &SceneFile) -> String {
    serde_json::to_string_pretty(scene).unwrap_or_default()
}

/// Parse a scene file, rejecting any payload whose top level lacks an
/// `entities` array. The caller keeps its current scene untouched on error.
pub fn deserialize_scene(text: &str) -> Result<SceneFile, SceneFileError> {
    let value: serde_json::Value = serde_json::from_str(text)?;
    if !value.get("entities").is_some_and(|e| e.is_array()) {
        return Err(SceneFileError::MissingEntities);
    }
    Ok(serde_json::from_value(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entity(id: &str) -> Entity {
        Entity {
            id: id.to_string(),
            name: "Thing".to_string(),
            tag: "Untagged".to_string(),
            enabled: true,
            transform: EntityTransform::default(),
            render: RenderDescriptor::default(),
        }
    }

    #[test]
    fn test_scene_roundtrip() {
        let scene = SceneFile {
            version: SCENE_FORMAT_VERSION,
            project_id: "p1".to_string(),
            saved_at: 1234,
            entities: vec![entity("a"), entity("b")],
        };
        let json = serialize_scene(&scene);
        let parsed = deserialize_scene(&json).unwrap();
        assert_eq!(parsed, scene);
    }

    #[test]
    fn test_wire_field_names() {
        let scene = SceneFile {
            project_id: "p1".to_string(),
            saved_at: 99,
            ..Default::default()
        };
        let json = serialize_scene(&scene);
        assert!(json.contains("\"projectId\""));
        assert!(json.contains("\"savedAt\""));
        assert!(json.contains("\"entities\""));
    }

    #[test]
    fn test_deserialize_minimal_payload() {
        let parsed = deserialize_scene(r#"{"entities": []}"#).unwrap();
        assert_eq!(parsed.version, SCENE_FORMAT_VERSION);
        assert!(parsed.entities.is_empty());
        assert!(parsed.project_id.is_empty());
    }

    #[test]
    fn test_deserialize_rejects_missing_entities() {
        let err = deserialize_scene("{}").unwrap_err();
        assert!(matches!(err, SceneFileError::MissingEntities));
    }

    #[test]
    fn test_deserialize_rejects_non_array_entities() {
        let err = deserialize_scene(r#"{"entities": 5}"#).unwrap_err();
        assert!(matches!(err, SceneFileError::MissingEntities));
    }

    #[test]
    fn test_deserialize_rejects_malformed_json() {
        let err = deserialize_scene("not json").unwrap_err();
        assert!(matches!(err, SceneFileError::Json(_)));
    }

    #[test]
    fn test_entity_defaults_on_parse() {
        let json = r#"{
            "entities": [{
                "id": "e1",
                "transform": {"x": 1.0, "y": 2.0, "rot": 0.0, "scale": 1.0},
                "render": {"shape": "circle", "size": 20.0}
            }]
        }"#;
        let parsed = deserialize_scene(json).unwrap();
        let e = &parsed.entities[0];
        assert!(e.enabled);
        assert!(e.name.is_empty());
        assert_eq!(e.render.shape, Shape::Circle);
    }

    #[test]
    fn test_shape_serde_names() {
        let json = serde_json::to_string(&Shape::Cross).unwrap();
        assert_eq!(json, "\"cross\"");
    }
}
