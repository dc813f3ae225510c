use shared::{Entity, EntityId};

/// Multi-selection with a distinguished primary (the last-clicked entity).
///
/// The primary drives single-entity inspector edits and local-axis gizmo
/// orientation. When the last-clicked entity leaves the selection (external
/// deletion, undo), the primary falls back to the selected entity with the
/// lowest scene-order index.
#[derive(Default, Clone)]
pub struct SelectionState {
    selected: Vec<EntityId>,
    last_clicked: Option<EntityId>,
}

impl SelectionState {
    /// Select exactly one entity and make it primary.
    pub fn select_single(&mut self, id: EntityId) {
        self.selected.clear();
        self.selected.push(id.clone());
        self.last_clicked = Some(id);
    }

    /// Toggle membership (Ctrl+click). The toggled id becomes primary whether
    /// it entered or left the selection.
    pub fn toggle(&mut self, id: EntityId) {
        if let Some(pos) = self.selected.iter().position(|s| s == &id) {
            self.selected.remove(pos);
        } else {
            self.selected.push(id.clone());
        }
        self.last_clicked = Some(id);
    }

    /// Select the contiguous scene-order range between two ids, inclusive of
    /// both endpoints in either direction. Degrades to a single-select of
    /// `to` when either endpoint no longer exists.
    pub fn select_range(&mut self, from: &EntityId, to: &EntityId, entities: &[Entity]) {
        let a = entities.iter().position(|e| &e.id == from);
        let b = entities.iter().position(|e| &e.id == to);

        match (a, b) {
            (Some(a), Some(b)) => {
                let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
                self.selected = entities[lo..=hi].iter().map(|e| e.id.clone()).collect();
                self.last_clicked = Some(to.clone());
            }
            _ => self.select_single(to.clone()),
        }
    }

    /// Clear selection and primary (empty-canvas click).
    pub fn clear(&mut self) {
        self.selected.clear();
        self.last_clicked = None;
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.iter().any(|s| s == id)
    }

    /// Selected ids, in selection order
    pub fn ids(&self) -> &[EntityId] {
        &self.selected
    }

    pub fn count(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn last_clicked(&self) -> Option<&EntityId> {
        self.last_clicked.as_ref()
    }

    /// Resolve the primary id against the scene's entity order: the
    /// last-clicked id when still selected, otherwise the selected id with
    /// the lowest scene-order index.
    pub fn primary_in(&self, entities: &[Entity]) -> Option<EntityId> {
        if let Some(last) = &self.last_clicked {
            if self.selected.iter().any(|s| s == last) {
                return Some(last.clone());
            }
        }
        entities
            .iter()
            .find(|e| self.is_selected(&e.id))
            .map(|e| e.id.clone())
            .or_else(|| self.selected.first().cloned())
    }

    /// Replace contents from a history snapshot. A snapshot without a primary
    /// falls back to its first selected id.
    pub fn restore(&mut self, ids: Vec<EntityId>, last_clicked: Option<EntityId>) {
        self.last_clicked = last_clicked.or_else(|| ids.first().cloned());
        self.selected = ids;
    }
}
