use crate::models::common::PaginationQuery;
use serde::Deserialize;
use ts_rs::TS;

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/proker.ts")]
pub struct ProkerListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub period_id: Option<i64>,
    pub division_id: Option<i64>,
    pub search: Option<String>,
}

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/proker.ts")]
pub struct CreateProkerRequest {
    pub name: String,
    pub division_id: i64,
    pub period_id: i64,
}

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/proker.ts")]
pub struct UpdateProkerRequest {
    pub name: Option<String>,
    pub division_id: Option<i64>,
}

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/proker.ts")]
pub struct AddPanitiaRequest {
    pub user_id: i64,
}
