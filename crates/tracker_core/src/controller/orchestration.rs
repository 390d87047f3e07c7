//! Sequences each UI action across the item store, the presentation surface
//! and the persisted mirror.
//!
//! The store is mutated first; the surface and persistence follow as ordered
//! side effects. Mirror failures are logged and do not undo the in-memory
//! change.

use shared::{
    domain::{EditMode, ItemId},
    error::TrackerError,
};
use storage::ItemPersistence;

use crate::{
    controller::events::{UiError, UiEvent},
    item_store::ItemStore,
    surface::PresentationSurface,
};

pub struct Orchestrator<P, S> {
    store: ItemStore,
    persistence: P,
    surface: S,
}

impl<P, S> Orchestrator<P, S>
where
    P: ItemPersistence,
    S: PresentationSurface,
{
    /// Seeds the store from persistence and draws the initial screen.
    pub fn init(persistence: P, mut surface: S) -> Self {
        let items = match persistence.load() {
            Ok(items) => items,
            Err(err) => {
                let detail = format!("{err:#}");
                tracing::warn!(error = %detail, "failed to load persisted items; starting empty");
                Vec::new()
            }
        };
        let store = ItemStore::from_items(items);
        tracing::info!(items = store.len(), "item store initialized");

        if store.is_empty() {
            surface.set_visible(false);
        } else {
            surface.render_all(store.items());
            surface.set_visible(true);
        }
        surface.show_total(store.total_calories());

        Self {
            store,
            persistence,
            surface,
        }
    }

    pub fn store(&self) -> &ItemStore {
        &self.store
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn persistence(&self) -> &P {
        &self.persistence
    }

    pub fn dispatch(&mut self, event: UiEvent) -> Result<(), UiError> {
        tracing::debug!(event = event.name(), "handling ui event");

        let outcome = match &event {
            UiEvent::AddRequested => self.add_item(),
            UiEvent::EditRequested { element_id } => self.begin_edit(element_id),
            UiEvent::CommitEditRequested => self.commit_edit(),
            UiEvent::DeleteRequested => self.delete_current(),
            UiEvent::CancelEditRequested => {
                self.restore_add_mode();
                Ok(())
            }
            UiEvent::ClearAllRequested => {
                self.clear_all();
                Ok(())
            }
        };

        outcome.map_err(|err| {
            let err = UiError::for_event(&event, err);
            tracing::debug!(event = event.name(), error = %err, "ui event rejected");
            self.surface.show_error(&err.notice());
            err
        })
    }

    fn add_item(&mut self) -> Result<(), TrackerError> {
        let input = self.surface.read_form();
        let item = self.store.add(&input)?;

        self.surface.append_one(&item);
        self.surface.set_visible(true);
        self.refresh_total();
        self.mirror("store_append", |p| p.store_append(&item));
        self.surface.clear_form();
        Ok(())
    }

    fn begin_edit(&mut self, element_id: &str) -> Result<(), TrackerError> {
        let Some(id) = ItemId::from_element_id(element_id) else {
            tracing::debug!(element_id, "edit requested for unknown element");
            return Ok(());
        };
        let Some(item) = self.store.get_by_id(id).cloned() else {
            tracing::debug!(%id, "edit requested for missing item");
            return Ok(());
        };

        self.store.set_current(&item);
        self.surface.populate_form(&item);
        self.surface.set_mode(EditMode::Editing);
        Ok(())
    }

    fn commit_edit(&mut self) -> Result<(), TrackerError> {
        let input = self.surface.read_form();
        let item = self.store.update(&input)?;

        self.surface.update_one(&item);
        self.refresh_total();
        self.mirror("update", |p| p.update(&item));
        self.restore_add_mode();
        Ok(())
    }

    fn delete_current(&mut self) -> Result<(), TrackerError> {
        let id = self
            .store
            .current()
            .map(|item| item.id)
            .ok_or(TrackerError::NoCurrentItem)?;
        self.store.delete(id);

        self.surface.remove_one(id);
        self.mirror("remove", |p| p.remove(id));
        self.refresh_total();
        self.restore_add_mode();
        if self.store.is_empty() {
            self.surface.set_visible(false);
        }
        Ok(())
    }

    fn clear_all(&mut self) {
        self.store.clear();

        self.surface.clear_all();
        self.restore_add_mode();
        self.surface.set_visible(false);
        self.mirror("clear_all", |p| p.clear_all());
        self.refresh_total();
    }

    fn restore_add_mode(&mut self) {
        self.store.clear_current();
        self.surface.set_mode(EditMode::Adding);
        self.surface.clear_form();
    }

    fn refresh_total(&mut self) {
        self.surface.show_total(self.store.total_calories());
    }

    fn mirror(&mut self, op: &'static str, write: impl FnOnce(&mut P) -> anyhow::Result<()>) {
        if let Err(err) = write(&mut self.persistence) {
            let detail = format!("{err:#}");
            tracing::warn!(op, error = %detail, "failed to mirror item change to storage");
        }
    }
}

#[cfg(test)]
#[path = "../tests/orchestration_tests.rs"]
mod tests;
