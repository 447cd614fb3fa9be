//! User actions and the re-render sequence that follows each one.
//!
//! `HealthTracker` owns the entry store and a presenter. Every mutating
//! action updates the store (which writes through to persistence) and then
//! re-renders list, charts and averages, in that order.

use crate::averages::{exercise_series, sleep_series, weekly_averages};
use crate::presenter::Presenter;
use crate::recommendation::{generate_recommendation, Recommendation};
use crate::storage::EntryPersistence;
use crate::store::EntryStore;
use crate::{Entry, EntryInput, Result};
use std::path::{Path, PathBuf};

pub const CLEAR_PROMPT: &str = "Are you sure you want to clear all data?";
pub const CLEARED_NOTICE: &str = "All data cleared. Add new entries to start again.";
pub const EMPTY_EXPORT_NOTICE: &str = "No data to export!";

pub struct HealthTracker<P: EntryPersistence, V: Presenter> {
    store: EntryStore<P>,
    presenter: V,
}

impl<P: EntryPersistence, V: Presenter> HealthTracker<P, V> {
    pub fn new(store: EntryStore<P>, presenter: V) -> Self {
        Self { store, presenter }
    }

    pub fn store(&self) -> &EntryStore<P> {
        &self.store
    }

    pub fn presenter(&self) -> &V {
        &self.presenter
    }

    pub fn entries(&self) -> &[Entry] {
        self.store.snapshot()
    }

    /// Render the current views without changing anything
    pub fn refresh(&mut self) {
        let entries = self.store.snapshot();
        self.presenter.render_list(entries);
        self.presenter
            .render_charts(&sleep_series(entries), &exercise_series(entries));
        self.presenter.render_averages(&weekly_averages(entries));
    }

    /// Store a new entry and show advice for it
    pub fn submit(&mut self, input: EntryInput) -> Result<Recommendation> {
        let recommendation = generate_recommendation(self.store.append(input)?);
        self.refresh();
        self.presenter.render_recommendation(&recommendation);
        Ok(recommendation)
    }

    pub fn delete(&mut self, index: usize) -> Result<Entry> {
        let removed = self.store.remove_at(index)?;
        self.refresh();
        Ok(removed)
    }

    /// Remove the entry at `index` and return its values for re-entry
    ///
    /// The entry is gone until the values are submitted again.
    pub fn edit(&mut self, index: usize) -> Result<EntryInput> {
        let values = self.store.begin_edit(index)?;
        self.refresh();
        Ok(values)
    }

    /// Clear everything once `confirm` agrees
    ///
    /// Returns whether the collection was cleared.
    pub fn clear<F>(&mut self, confirm: F) -> Result<bool>
    where
        F: FnOnce(&str) -> bool,
    {
        if !confirm(CLEAR_PROMPT) {
            tracing::debug!("Clear cancelled");
            return Ok(false);
        }

        self.store.clear()?;
        self.refresh();
        self.presenter.notify(CLEARED_NOTICE);
        Ok(true)
    }

    /// Export the collection as CSV to `path`
    ///
    /// With nothing stored the user is notified and no file is written.
    pub fn export(&mut self, path: &Path) -> Result<Option<PathBuf>> {
        if self.store.is_empty() {
            self.presenter.notify(EMPTY_EXPORT_NOTICE);
            return Ok(None);
        }

        crate::export::write_export(self.store.snapshot(), path)?;
        Ok(Some(path.to_path_buf()))
    }
}
