pub mod areas;
pub mod client;
pub mod envelope;
pub mod exports;
pub mod logs;
pub mod species;
pub mod submissions;

pub use client::ApiClient;
