use serde::{Deserialize, Serialize};
use ts_rs::TS;

// Organizational roles
#[derive(Debug, Clone, Serialize, PartialEq, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub enum UserRole {
    Admin,   // system management, excluded from periodic pairing
    Bpi,     // board/oversight, rates and is rated by everyone
    Kadiv,   // division head
    Anggota, // regular member
}

impl UserRole {
    pub const ADMIN: &'static str = "ADMIN";
    pub const BPI: &'static str = "BPI";
    pub const KADIV: &'static str = "KADIV";
    pub const ANGGOTA: &'static str = "ANGGOTA";

    pub fn admin_roles() -> &'static [&'static UserRole] {
        &[&Self::Admin]
    }
    /// Roles allowed to manage periods, divisions, users, prokers,
    /// indicators and events.
    pub fn manage_roles() -> &'static [&'static UserRole] {
        &[&Self::Admin, &Self::Bpi, &Self::Kadiv]
    }
    /// Roles allowed to read aggregated reports.
    pub fn report_roles() -> &'static [&'static UserRole] {
        &[&Self::Admin, &Self::Bpi, &Self::Kadiv]
    }
    pub fn all_roles() -> &'static [&'static UserRole] {
        &[&Self::Admin, &Self::Bpi, &Self::Kadiv, &Self::Anggota]
    }
}

impl<'de> Deserialize<'de> for UserRole {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            UserRole::ADMIN => Ok(UserRole::Admin),
            UserRole::BPI => Ok(UserRole::Bpi),
            UserRole::KADIV => Ok(UserRole::Kadiv),
            UserRole::ANGGOTA => Ok(UserRole::Anggota),
            _ => Err(serde::de::Error::custom(format!(
                "Invalid user role: '{s}'. Supported roles: ADMIN, BPI, KADIV, ANGGOTA"
            ))),
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::Admin => write!(f, "{}", UserRole::ADMIN),
            UserRole::Bpi => write!(f, "{}", UserRole::BPI),
            UserRole::Kadiv => write!(f, "{}", UserRole::KADIV),
            UserRole::Anggota => write!(f, "{}", UserRole::ANGGOTA),
        }
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ADMIN" => Ok(UserRole::Admin),
            "BPI" => Ok(UserRole::Bpi),
            "KADIV" => Ok(UserRole::Kadiv),
            "ANGGOTA" => Ok(UserRole::Anggota),
            _ => Err(format!("Invalid user role: {s}")),
        }
    }
}

// User entity
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub struct User {
    pub id: i64,
    pub nim: String,
    pub name: String,
    pub email: Option<String>,
    #[serde(skip_serializing, default)]
    #[ts(skip)]
    pub password_hash: String,
    pub role: UserRole,
    pub period_id: i64,
    pub division_id: Option<i64>,
    pub is_active: bool,
    pub last_login: Option<chrono::DateTime<chrono::Utc>>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl User {
    // Access token generation (JWT)
    pub async fn generate_access_token(&self) -> String {
        match crate::utils::jwt::JwtUtils::generate_access_token(self.id, &self.role.to_string()) {
            Ok(token) => token,
            Err(e) => {
                tracing::error!("JWT token generation failed: {}", e);
                format!(
                    "fallback_token_{}_{}",
                    self.id,
                    chrono::Utc::now().timestamp()
                )
            }
        }
    }

    pub async fn generate_refresh_token(
        &self,
        refresh_token_expiry: Option<chrono::TimeDelta>,
    ) -> String {
        match crate::utils::jwt::JwtUtils::generate_refresh_token(
            self.id,
            &self.role.to_string(),
            refresh_token_expiry,
        ) {
            Ok(token) => token,
            Err(e) => {
                tracing::error!("JWT refresh token generation failed: {}", e);
                format!(
                    "fallback_refresh_token_{}_{}",
                    self.id,
                    chrono::Utc::now().timestamp()
                )
            }
        }
    }

    // Access + refresh token pair
    pub async fn generate_token_pair(
        &self,
        refresh_token_expiry: Option<chrono::TimeDelta>,
    ) -> Result<crate::utils::jwt::TokenPair, String> {
        crate::utils::jwt::JwtUtils::generate_token_pair(
            self.id,
            &self.role.to_string(),
            refresh_token_expiry,
        )
        .map_err(|e| format!("Failed to generate token pair: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_role_round_trip() {
        for role in UserRole::all_roles() {
            let parsed = UserRole::from_str(&role.to_string()).unwrap();
            assert_eq!(&&parsed, role);
        }
    }

    #[test]
    fn test_unknown_role_rejected() {
        assert!(UserRole::from_str("SUPERVISOR").is_err());
        assert!(UserRole::from_str("admin").is_err());
    }

    #[test]
    fn test_manage_roles_exclude_anggota() {
        assert!(!UserRole::manage_roles().contains(&&UserRole::Anggota));
        assert!(UserRole::manage_roles().contains(&&UserRole::Kadiv));
    }
}
