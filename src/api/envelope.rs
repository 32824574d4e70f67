//! Common wire envelopes shared by every endpoint.

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Standard response wrapper: `{ success, data, code?, message? }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Unwrap the payload of a successful response.
    pub fn into_data(self) -> AppResult<T> {
        if !self.success {
            return Err(AppError::Api(self.reject_message()));
        }
        self.data
            .ok_or_else(|| AppError::Api("response carried no data".to_string()))
    }

    /// For mutations whose `data` is null: only check the success flag.
    pub fn ensure_success(self) -> AppResult<()> {
        if self.success {
            Ok(())
        } else {
            Err(AppError::Api(self.reject_message()))
        }
    }

    fn reject_message(&self) -> String {
        match (&self.message, &self.code) {
            (Some(m), _) => m.clone(),
            (None, Some(c)) => format!("request rejected with code {c}"),
            (None, None) => "request rejected".to_string(),
        }
    }
}

/// Paginated payload: `{ content, page, size, totalPages, totalElements, ... }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paged<T> {
    pub content: Vec<T>,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub size: u32,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_elements: u64,
    #[serde(default)]
    pub first: bool,
    #[serde(default)]
    pub last: bool,
    #[serde(default)]
    pub has_next: bool,
    #[serde(default)]
    pub has_previous: bool,
}

/// `{ id }` payload returned by create endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Created {
    pub id: i64,
}
