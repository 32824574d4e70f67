//! Query cache with invalidate-then-refetch reconciliation.
//!
//! Every server read is identified by a [`QueryKey`]. Fetched values are
//! kept for the lifetime of the command and served from memory while fresh;
//! a successful mutation invalidates the affected scope so the next read
//! goes back to the server and local state can be reconciled against the
//! authoritative response.

use crate::errors::AppResult;
use crate::models::log_kind::LogKind;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashMap;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum QueryKey {
    Areas { page: u32 },
    AreaDetail { area_id: i64 },
    AreaLogs { area_id: i64, kind: LogKind },
    Submissions { page: u32, signature: String },
    Species,
}

/// Invalidation scope. `Areas` covers every area-rooted key (list pages,
/// details and logs), the narrower scopes only their own entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyScope {
    Areas,
    Area(i64),
    AreaLogs(i64, LogKind),
    Submissions,
    Species,
}

impl QueryKey {
    pub fn in_scope(&self, scope: &KeyScope) -> bool {
        match scope {
            KeyScope::Areas => matches!(
                self,
                QueryKey::Areas { .. } | QueryKey::AreaDetail { .. } | QueryKey::AreaLogs { .. }
            ),
            KeyScope::Area(id) => match self {
                QueryKey::AreaDetail { area_id } => area_id == id,
                QueryKey::AreaLogs { area_id, .. } => area_id == id,
                _ => false,
            },
            KeyScope::AreaLogs(id, kind) => match self {
                QueryKey::AreaLogs { area_id, kind: k } => area_id == id && k == kind,
                _ => false,
            },
            KeyScope::Submissions => matches!(self, QueryKey::Submissions { .. }),
            KeyScope::Species => matches!(self, QueryKey::Species),
        }
    }
}

struct Entry {
    value: Value,
    fetched_at: Instant,
    invalidated: bool,
}

pub struct QueryCache {
    entries: HashMap<QueryKey, Entry>,
    stale_after: Duration,
}

impl QueryCache {
    pub fn new(stale_after: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            stale_after,
        }
    }

    /// Serve `key` from memory while fresh; otherwise run `fetch`, store the
    /// result and return it. A stale or invalidated entry always refetches.
    pub fn get_or_fetch<T, F>(&mut self, key: QueryKey, fetch: F) -> AppResult<T>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> AppResult<T>,
    {
        if let Some(entry) = self.entries.get(&key)
            && !entry.invalidated
            && entry.fetched_at.elapsed() < self.stale_after
        {
            return Ok(serde_json::from_value(entry.value.clone())?);
        }

        let fresh = fetch()?;
        self.entries.insert(
            key,
            Entry {
                value: serde_json::to_value(&fresh)?,
                fetched_at: Instant::now(),
                invalidated: false,
            },
        );
        Ok(fresh)
    }

    /// Mark every entry in `scope` stale. Returns how many entries were hit.
    pub fn invalidate(&mut self, scope: &KeyScope) -> usize {
        let mut hit = 0;
        for (key, entry) in self.entries.iter_mut() {
            if key.in_scope(scope) && !entry.invalidated {
                entry.invalidated = true;
                hit += 1;
            }
        }
        hit
    }

    /// True when `key` would be served from memory right now.
    pub fn is_fresh(&self, key: &QueryKey) -> bool {
        self.entries
            .get(key)
            .map(|e| !e.invalidated && e.fetched_at.elapsed() < self.stale_after)
            .unwrap_or(false)
    }
}
