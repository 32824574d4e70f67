use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;
use serde_json::Value;

/// Parse a CLI date argument (YYYY-MM-DD).
pub fn parse_ymd(s: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| AppError::InvalidDate(s.to_string()))
}

/// Render a server timestamp as "YYYY-MM-DD".
///
/// The server is inconsistent here: some endpoints return an ISO string,
/// others a `[year, month, day, ...]` array. Anything else becomes "".
pub fn to_date_string(v: Option<&Value>) -> String {
    match v {
        Some(Value::String(s)) => s.chars().take(10).collect(),
        Some(Value::Array(parts)) if parts.len() >= 3 => {
            let nums: Vec<i64> = parts.iter().filter_map(Value::as_i64).collect();
            if nums.len() >= 3 {
                format!("{}-{:02}-{:02}", nums[0], nums[1], nums[2])
            } else {
                String::new()
            }
        }
        _ => String::new(),
    }
}
