use super::entities::Period;
use crate::models::common::PaginationInfo;
use serde::Serialize;
use ts_rs::TS;

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/period.ts")]
pub struct PeriodResponse {
    pub period: Period,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/period.ts")]
pub struct PeriodListResponse {
    pub items: Vec<Period>,
    pub pagination: PaginationInfo,
}
