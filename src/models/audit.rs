use serde::Serialize;

// Security-relevant actions recorded to the audit trail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuditAction {
    Login,
    LoginFailed,
    PasswordChanged,
    UserCreated,
    UserDeleted,
    EventCreated,
    EventDeleted,
    EvaluationSubmitted,
    ReportExported,
}

impl std::fmt::Display for AuditAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            AuditAction::Login => "LOGIN",
            AuditAction::LoginFailed => "LOGIN_FAILED",
            AuditAction::PasswordChanged => "PASSWORD_CHANGED",
            AuditAction::UserCreated => "USER_CREATED",
            AuditAction::UserDeleted => "USER_DELETED",
            AuditAction::EventCreated => "EVENT_CREATED",
            AuditAction::EventDeleted => "EVENT_DELETED",
            AuditAction::EvaluationSubmitted => "EVALUATION_SUBMITTED",
            AuditAction::ReportExported => "REPORT_EXPORTED",
        };
        write!(f, "{s}")
    }
}

#[derive(Debug, Clone)]
pub struct AuditEntry {
    pub action: AuditAction,
    pub user_id: Option<i64>,
    pub success: bool,
    pub ip: Option<String>,
    pub user_agent: Option<String>,
    pub metadata: Option<serde_json::Value>,
}

impl AuditEntry {
    pub fn new(action: AuditAction, success: bool) -> Self {
        Self {
            action,
            user_id: None,
            success,
            ip: None,
            user_agent: None,
            metadata: None,
        }
    }

    pub fn user(mut self, user_id: i64) -> Self {
        self.user_id = Some(user_id);
        self
    }

    pub fn ip(mut self, ip: Option<String>) -> Self {
        self.ip = ip;
        self
    }

    pub fn user_agent(mut self, user_agent: Option<String>) -> Self {
        self.user_agent = user_agent;
        self
    }

    pub fn metadata(mut self, metadata: serde_json::Value) -> Self {
        self.metadata = Some(metadata);
        self
    }
}
