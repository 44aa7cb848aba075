use super::entities::Division;
use crate::models::common::PaginationInfo;
use serde::Serialize;
use ts_rs::TS;

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/division.ts")]
pub struct DivisionResponse {
    pub division: Division,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/division.ts")]
pub struct DivisionListResponse {
    pub items: Vec<Division>,
    pub pagination: PaginationInfo,
}
