use super::entities::{Panitia, Proker};
use crate::models::common::PaginationInfo;
use serde::Serialize;
use ts_rs::TS;

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/proker.ts")]
pub struct ProkerResponse {
    pub proker: Proker,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/proker.ts")]
pub struct ProkerListResponse {
    pub items: Vec<Proker>,
    pub pagination: PaginationInfo,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/proker.ts")]
pub struct PanitiaListResponse {
    pub items: Vec<Panitia>,
}
