use super::entities::IndicatorCategory;
use crate::models::common::PaginationQuery;
use serde::Deserialize;
use ts_rs::TS;

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/indicator.ts")]
pub struct IndicatorListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub category: Option<IndicatorCategory>,
    pub is_active: Option<bool>,
    pub search: Option<String>,
}

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/indicator.ts")]
pub struct CreateIndicatorRequest {
    pub name: String,
    pub category: IndicatorCategory,
}

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/indicator.ts")]
pub struct UpdateIndicatorRequest {
    pub name: Option<String>,
    pub category: Option<IndicatorCategory>,
    pub is_active: Option<bool>,
}
