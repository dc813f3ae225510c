//! Editor state management
//!
//! [`EditorSession`] is the single context object owning every piece of
//! mutable editor state. It is created at startup and passed by reference to
//! each panel; nothing lives in ambient/global scope.

mod actions;
pub mod history;
mod inspector;
pub mod scene;
pub mod selection;
pub mod settings;
mod transform_ops;
pub mod view;

use std::time::Instant;

use glam::Vec2;
use shared::Entity;

use crate::helpers::timestamp_ms;
use crate::viewport::camera::Camera2D;
use crate::viewport::gizmo::GizmoState;
use history::{History, Snapshot};
use scene::{LocalStore, SceneState};
use selection::SelectionState;
use settings::AppSettings;
use view::{ViewBridge, ViewHooks};

/// Panel visibility flags
pub struct PanelVisibility {
    pub hierarchy: bool,
    pub inspector: bool,
}

impl Default for PanelVisibility {
    fn default() -> Self {
        Self {
            hierarchy: true,
            inspector: true,
        }
    }
}

/// Editor session context: scene, selection, history, camera, gizmo,
/// settings, and the persistence/view seams. Lives for exactly one editor
/// run.
pub struct EditorSession {
    pub scene: SceneState,
    pub selection: SelectionState,
    pub history: History,
    pub camera: Camera2D,
    pub gizmo: GizmoState,
    pub settings: AppSettings,
    pub panels: PanelVisibility,
    pub views: ViewBridge,
    store: Option<LocalStore>,
    project_id: String,
    scene_key: String,
    status: String,
}

impl EditorSession {
    /// Open a session for a project: load its stored scene, or seed the
    /// starter scene when none exists.
    pub fn new(project_id: &str, store: Option<LocalStore>) -> Self {
        let scene_key = format!("scene_{project_id}");

        let mut scene = SceneState::default();
        let stored = store.as_ref().and_then(|s| s.load(&scene_key));
        match stored {
            Some(file) => {
                scene.set_entities(file.entities);
                tracing::info!("loaded scene {scene_key} ({} entities)", scene.len());
            }
            None => {
                scene.seed_default();
                tracing::info!("new scene created for project {project_id}");
            }
        }

        Self::boot(project_id, scene_key, scene, store)
    }

    /// Session over an explicit entity list, no store (harness, tests).
    pub fn with_scene(project_id: &str, entities: Vec<Entity>) -> Self {
        let scene_key = format!("scene_{project_id}");
        let mut scene = SceneState::default();
        scene.set_entities(entities);
        Self::boot(project_id, scene_key, scene, None)
    }

    fn boot(
        project_id: &str,
        scene_key: String,
        scene: SceneState,
        store: Option<LocalStore>,
    ) -> Self {
        let mut selection = SelectionState::default();
        if let Some(first) = scene.first_id() {
            selection.select_single(first);
        }

        let mut session = Self {
            scene,
            selection,
            history: History::default(),
            camera: Camera2D::new(),
            gizmo: GizmoState::default(),
            settings: AppSettings::load(),
            panels: PanelVisibility::default(),
            views: ViewBridge::default(),
            store,
            project_id: project_id.to_string(),
            scene_key,
            status: "Ready".to_string(),
        };
        session.push_history("Initial");
        session.autosave();
        session
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    pub fn scene_key(&self) -> &str {
        &self.scene_key
    }

    /// Status line shown in the status bar
    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status = msg.into();
    }

    /// Primary selected entity, if any
    pub fn primary(&self) -> Option<&Entity> {
        let id = self.selection.primary_in(&self.scene.entities)?;
        self.scene.get_entity(&id)
    }

    /// Selected entities in scene order
    pub fn selected_entities(&self) -> Vec<&Entity> {
        self.scene
            .entities
            .iter()
            .filter(|e| self.selection.is_selected(&e.id))
            .collect()
    }

    /// Centroid of the selected entities' world positions (the gizmo pivot),
    /// or None when nothing is selected.
    pub fn selection_pivot(&self) -> Option<Vec2> {
        let sel = self.selected_entities();
        if sel.is_empty() {
            return None;
        }
        let mut sum = Vec2::ZERO;
        for e in &sel {
            sum += Vec2::new(e.transform.x, e.transform.y);
        }
        Some(sum / sel.len() as f32)
    }

    /// Flush the debounced history slot; called once per frame. Firing
    /// mid-drag only snapshots state — it never touches the drag itself.
    pub fn tick(&mut self, now: Instant) {
        if let Some(label) = self.history.poll_pending(now) {
            let snap = self.snapshot();
            self.history.push(label, snap, timestamp_ms());
        }
    }

    pub(crate) fn snapshot(&self) -> Snapshot {
        Snapshot {
            entities: self.scene.entities.clone(),
            selected_ids: self.selection.ids().to_vec(),
            last_clicked: self.selection.last_clicked().cloned(),
        }
    }

    /// Notify both view hooks after a mutation
    pub(crate) fn refresh_views(&mut self) {
        self.views.refresh_hierarchy();
        self.views.refresh_inspector();
    }
}
