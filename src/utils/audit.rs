//! Audit trail helpers.
//!
//! Writes go through a spawned task so a slow or failing audit insert never
//! blocks the request path.

use crate::models::audit::{AuditAction, AuditEntry};
use crate::storage::Storage;
use actix_web::HttpRequest;
use std::sync::Arc;
use tracing::warn;

pub fn client_ip(req: &HttpRequest) -> Option<String> {
    req.connection_info()
        .realip_remote_addr()
        .map(|s| s.to_string())
}

pub fn user_agent(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get(actix_web::http::header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string())
}

pub fn entry_from_request(req: &HttpRequest, action: AuditAction, success: bool) -> AuditEntry {
    AuditEntry::new(action, success)
        .ip(client_ip(req))
        .user_agent(user_agent(req))
}

/// Fire-and-forget audit write
pub fn record(storage: &Arc<dyn Storage>, entry: AuditEntry) {
    let storage = Arc::clone(storage);
    tokio::spawn(async move {
        let action = entry.action;
        if let Err(e) = storage.insert_audit_log(entry).await {
            warn!("Audit log write failed for {}: {}", action, e);
        }
    });
}
