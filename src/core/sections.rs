//! Species-grouped sections.
//!
//! The server returns per-area logs as a flat chronological page. The
//! dashboard works with them grouped per species: one section per species,
//! sections ordered by first appearance, records inside a section kept in
//! source order. The grouping is a pure single-pass transform; the flat
//! server list stays the source of truth and sections are rederived after
//! every authoritative fetch.

use serde::Serialize;
use std::collections::HashMap;

/// A log record that belongs to a species. Implemented by transplant and
/// growth logs; environment and media logs have no species axis.
pub trait SpeciesLog {
    fn species_id(&self) -> i64;
    fn species_name(&self) -> &str;
}

/// All logs of one species within one area.
#[derive(Debug, Clone, Serialize)]
pub struct SpeciesSection<T> {
    pub species_id: i64,
    pub species_name: String,
    pub logs: Vec<T>,
}

impl<T> SpeciesSection<T> {
    pub fn new(species_id: i64, species_name: &str) -> Self {
        Self {
            species_id,
            species_name: species_name.to_string(),
            logs: Vec::new(),
        }
    }
}

/// Group a flat record sequence into per-species sections.
///
/// Single pass: the first record of an unseen species opens a new section at
/// the end of the output; every record is appended to its section in source
/// order. No dedup and no re-sort - if the server order is not
/// chronological, sections are not re-sorted either.
pub fn group_by_species<T: SpeciesLog>(logs: Vec<T>) -> Vec<SpeciesSection<T>> {
    let mut index: HashMap<i64, usize> = HashMap::new();
    let mut sections: Vec<SpeciesSection<T>> = Vec::new();

    for log in logs {
        let id = log.species_id();
        let i = match index.get(&id) {
            Some(i) => *i,
            None => {
                sections.push(SpeciesSection::new(id, log.species_name()));
                index.insert(id, sections.len() - 1);
                sections.len() - 1
            }
        };
        sections[i].logs.push(log);
    }

    sections
}

/// Inverse of [`group_by_species`]: concatenate section logs back into a
/// flat list, section by section.
pub fn flatten<T>(sections: Vec<SpeciesSection<T>>) -> Vec<T> {
    sections.into_iter().flat_map(|s| s.logs).collect()
}
