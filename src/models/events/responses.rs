use super::entities::{Event, IndicatorSnapshot};
use crate::models::common::PaginationInfo;
use serde::Serialize;
use ts_rs::TS;

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/event.ts")]
pub struct EventResponse {
    pub event: Event,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/event.ts")]
pub struct EventListResponse {
    pub items: Vec<Event>,
    pub pagination: PaginationInfo,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/event.ts")]
pub struct EventDetailResponse {
    pub event: Event,
    pub period_name: Option<String>,
    pub proker_name: Option<String>,
    pub indicators: Vec<IndicatorSnapshot>,
    pub assignment_count: u64,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/event.ts")]
pub struct EventCreatedResponse {
    pub event: Event,
    pub assignments_created: u64,
}
