use serde::{Deserialize, Serialize};
use ts_rs::TS;

// Program kerja (work program) owned by a division within one period
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/proker.ts")]
pub struct Proker {
    pub id: i64,
    pub name: String,
    pub division_id: i64,
    pub period_id: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

// Committee membership linking a user to a proker
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/proker.ts")]
pub struct Panitia {
    pub id: i64,
    pub proker_id: i64,
    pub user_id: i64,
    pub user_name: String,
    pub user_nim: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
