pub mod audit;
pub mod auth;
pub mod common;
pub mod divisions;
pub mod evaluations;
pub mod events;
pub mod indicators;
pub mod periods;
pub mod prokers;
pub mod reports;
pub mod users;

pub use common::error_code::ErrorCode;
pub use common::pagination::{PaginatedResponse, PaginationInfo, PaginationQuery};
pub use common::response::ApiResponse;

/// Application start time, recorded in main and exposed through app data
#[derive(Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
