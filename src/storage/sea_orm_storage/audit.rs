use super::SeaOrmStorage;
use crate::entity::audit_logs::ActiveModel;
use crate::errors::{PeerEvalError, Result};
use crate::models::audit::AuditEntry;
use sea_orm::{ActiveModelTrait, Set};

impl SeaOrmStorage {
    pub async fn insert_audit_log_impl(&self, entry: AuditEntry) -> Result<()> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            action: Set(entry.action.to_string()),
            user_id: Set(entry.user_id),
            success: Set(entry.success),
            ip: Set(entry.ip),
            user_agent: Set(entry.user_agent),
            metadata: Set(entry.metadata.map(|m| m.to_string())),
            created_at: Set(now),
            ..Default::default()
        };

        model
            .insert(&self.db)
            .await
            .map_err(|e| PeerEvalError::database_operation(format!("Insert audit log failed: {e}")))?;

        Ok(())
    }
}
