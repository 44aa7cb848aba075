use crate::models::common::PaginationQuery;
use serde::Deserialize;
use ts_rs::TS;

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/division.ts")]
pub struct DivisionListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub search: Option<String>,
}

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/division.ts")]
pub struct CreateDivisionRequest {
    pub name: String,
    #[serde(default)]
    pub is_oversight: bool,
}

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/division.ts")]
pub struct UpdateDivisionRequest {
    pub name: Option<String>,
    pub is_oversight: Option<bool>,
}
