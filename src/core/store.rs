//! Local section state between fetch and mutation.
//!
//! The store holds the sections derived from the last authoritative fetch
//! and lets the command layer edit them before the matching server mutation
//! round-trips. Edits are optimistic: the store diverges from server truth
//! until the caller invalidates the cached query and reconciles from a
//! fresh fetch.

use super::sections::{SpeciesLog, SpeciesSection, flatten, group_by_species};

/// Result of a store edit. Invalid or conflicting edits are ignored without
/// an error, mirroring the form behavior: nothing happens, nothing breaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreOutcome {
    Applied,
    Ignored,
}

impl StoreOutcome {
    pub fn applied(&self) -> bool {
        matches!(self, StoreOutcome::Applied)
    }
}

#[derive(Debug, Clone)]
pub struct SectionStore<T> {
    sections: Vec<SpeciesSection<T>>,
    dirty: bool,
}

impl<T: SpeciesLog> SectionStore<T> {
    pub fn from_logs(logs: Vec<T>) -> Self {
        Self {
            sections: group_by_species(logs),
            dirty: false,
        }
    }

    pub fn sections(&self) -> &[SpeciesSection<T>] {
        &self.sections
    }

    /// True when local edits have not yet been confirmed by a refetch.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn contains_species(&self, species_id: i64) -> bool {
        self.sections.iter().any(|s| s.species_id == species_id)
    }

    /// Add a species together with its first log. Ignored when the species
    /// is already present or the record carries no usable species id.
    pub fn add_species(&mut self, log: T) -> StoreOutcome {
        let id = log.species_id();
        if id <= 0 || self.contains_species(id) {
            return StoreOutcome::Ignored;
        }

        let mut section = SpeciesSection::new(id, log.species_name());
        section.logs.push(log);
        self.sections.push(section);
        self.dirty = true;
        StoreOutcome::Applied
    }

    /// Append a log to its species section. A log for a species not yet
    /// present opens a new section at the end of the current order.
    pub fn add_log(&mut self, log: T) -> StoreOutcome {
        let id = log.species_id();
        if id <= 0 {
            return StoreOutcome::Ignored;
        }

        match self.sections.iter_mut().find(|s| s.species_id == id) {
            Some(section) => section.logs.push(log),
            None => {
                let mut section = SpeciesSection::new(id, log.species_name());
                section.logs.push(log);
                self.sections.push(section);
            }
        }
        self.dirty = true;
        StoreOutcome::Applied
    }

    /// Drop a species section from local state. This is a client-side
    /// filter only; no server deletion is issued here (see DESIGN.md).
    pub fn remove_species(&mut self, species_id: i64) -> StoreOutcome {
        let before = self.sections.len();
        self.sections.retain(|s| s.species_id != species_id);

        if self.sections.len() == before {
            return StoreOutcome::Ignored;
        }
        self.dirty = true;
        StoreOutcome::Applied
    }

    /// Replace local state with sections derived from an authoritative
    /// fetch, discarding any optimistic divergence.
    pub fn reconcile(&mut self, logs: Vec<T>) {
        self.sections = group_by_species(logs);
        self.dirty = false;
    }

    /// Flatten current sections back into one list, section by section.
    pub fn into_logs(self) -> Vec<T> {
        flatten(self.sections)
    }

    pub fn log_count(&self) -> usize {
        self.sections.iter().map(|s| s.logs.len()).sum()
    }
}
