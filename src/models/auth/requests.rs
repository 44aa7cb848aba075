use serde::Deserialize;
use ts_rs::TS;

// Login request (from HTTP request)
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/auth.ts")]
pub struct LoginRequest {
    /// Student identification number
    pub nim: String,
    /// Password
    pub password: String,
    /// Extend refresh token lifetime
    #[serde(default)]
    pub remember_me: bool,
}

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/auth.ts")]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}
