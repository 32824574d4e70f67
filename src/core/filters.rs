//! Submission list filters and their query-string normalization.

use crate::errors::{AppError, AppResult};
use crate::models::activity::ActivityType;
use crate::models::review_status::ReviewStatus;

/// Status filter as typed on the CLI: `all` means "do not filter".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(ReviewStatus),
}

impl StatusFilter {
    pub fn parse(s: &str) -> AppResult<Self> {
        if s.eq_ignore_ascii_case("all") {
            return Ok(StatusFilter::All);
        }
        ReviewStatus::from_code(s)
            .map(StatusFilter::Only)
            .ok_or_else(|| AppError::InvalidStatus(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDir {
    Asc,
    Desc,
}

impl SortDir {
    pub fn parse(s: &str) -> AppResult<Self> {
        match s.to_lowercase().as_str() {
            "asc" => Ok(SortDir::Asc),
            "desc" => Ok(SortDir::Desc),
            _ => Err(AppError::InvalidSortDir(s.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortDir::Asc => "asc",
            SortDir::Desc => "desc",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SubmissionFilters {
    pub status: StatusFilter,
    pub keyword: Option<String>,
    pub activity: Option<ActivityType>,
    pub date_from: Option<String>,
    pub date_to: Option<String>,
    pub sort_by: Option<String>,
    pub sort_dir: Option<SortDir>,
}

impl SubmissionFilters {
    /// Normalize to the server's query parameters:
    /// - blank keyword omitted, otherwise trimmed
    /// - `all` status omitted, otherwise the uppercase code
    /// - activity passed through as its code
    /// - dates truncated to `YYYY-MM-DD`
    /// - sort keys only when present (the server fills defaults)
    pub fn to_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();

        if let Some(q) = &self.keyword {
            let q = q.trim();
            if !q.is_empty() {
                params.push(("keyword".into(), q.to_string()));
            }
        }

        if let StatusFilter::Only(status) = self.status {
            params.push(("status".into(), status.code().into()));
        }

        if let Some(activity) = self.activity {
            params.push(("activityType".into(), activity.code().into()));
        }

        if let Some(d) = &self.date_from
            && !d.is_empty()
        {
            params.push(("startDate".into(), truncate_date(d)));
        }
        if let Some(d) = &self.date_to
            && !d.is_empty()
        {
            params.push(("endDate".into(), truncate_date(d)));
        }

        if let Some(s) = &self.sort_by
            && !s.is_empty()
        {
            params.push(("sortBy".into(), s.clone()));
        }
        if let Some(dir) = self.sort_dir {
            params.push(("sortDir".into(), dir.as_str().into()));
        }

        params
    }

    /// Stable fingerprint used in cache keys so each filter combination
    /// gets its own entry.
    pub fn signature(&self) -> String {
        self.to_params()
            .into_iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// 1-based CLI page to the server's 0-based page index.
pub fn to_zero_based_page(page: u32) -> u32 {
    page.saturating_sub(1)
}

fn truncate_date(d: &str) -> String {
    d.chars().take(10).collect()
}
