use once_cell::sync::Lazy;
use regex::Regex;

static NIM_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+$").expect("Invalid nim regex"));

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}$").expect("Invalid email regex")
});

/// Student numbers are all-digit strings of 5 to 20 characters
pub fn validate_nim(nim: &str) -> Result<(), &'static str> {
    if nim.len() < 5 || nim.len() > 20 {
        return Err("NIM length must be between 5 and 20 characters");
    }
    if !NIM_RE.is_match(nim) {
        return Err("NIM must contain only digits");
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), &'static str> {
    if !EMAIL_RE.is_match(email) {
        return Err("Email format is invalid");
    }
    Ok(())
}

#[derive(Debug, Clone)]
pub struct PasswordValidationResult {
    pub is_valid: bool,
    pub errors: Vec<&'static str>,
}

impl PasswordValidationResult {
    pub fn error_message(&self) -> String {
        self.errors.join("; ")
    }
}

/// Password policy: at least 8 characters with an uppercase letter, a
/// lowercase letter and a digit; well-known weak passwords are rejected.
pub fn validate_password(password: &str) -> PasswordValidationResult {
    let mut errors = Vec::new();

    if password.len() < 8 {
        errors.push("Password must be at least 8 characters long");
    }

    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        errors.push("Password must contain at least one uppercase letter");
    }

    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        errors.push("Password must contain at least one lowercase letter");
    }

    if !password.chars().any(|c| c.is_ascii_digit()) {
        errors.push("Password must contain at least one digit");
    }

    let weak_passwords = [
        "password",
        "12345678",
        "123456789",
        "qwerty123",
        "admin123",
        "password1",
        "Password1",
        "Qwerty123",
        "Abcd1234",
    ];
    if weak_passwords
        .iter()
        .any(|&weak| password.eq_ignore_ascii_case(weak))
    {
        errors.push("Password is too common, please choose a stronger password");
    }

    PasswordValidationResult {
        is_valid: errors.is_empty(),
        errors,
    }
}

pub fn validate_password_simple(password: &str) -> Result<(), String> {
    let result = validate_password(password);
    if result.is_valid {
        Ok(())
    } else {
        Err(result.error_message())
    }
}

/// Scores must be integers from 1 to 5
pub fn validate_score(score: i32) -> Result<(), &'static str> {
    if (1..=5).contains(&score) {
        Ok(())
    } else {
        Err("Score must be an integer between 1 and 5")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_nim() {
        assert!(validate_nim("2110511001").is_ok());
        assert!(validate_nim("12345").is_ok());
    }

    #[test]
    fn test_invalid_nim() {
        assert!(validate_nim("1234").is_err());
        assert!(validate_nim("21105A1001").is_err());
        assert!(validate_nim("").is_err());
    }

    #[test]
    fn test_valid_password() {
        assert!(validate_password("SecureP@ss1").is_valid);
        assert!(validate_password("MyP@ssw0rd").is_valid);
        assert!(validate_password("SecurePass123").is_valid);
    }

    #[test]
    fn test_short_password() {
        let result = validate_password("Ab1");
        assert!(!result.is_valid);
        assert!(
            result
                .errors
                .contains(&"Password must be at least 8 characters long")
        );
    }

    #[test]
    fn test_no_uppercase() {
        let result = validate_password("abcd1234");
        assert!(!result.is_valid);
        assert!(
            result
                .errors
                .contains(&"Password must contain at least one uppercase letter")
        );
    }

    #[test]
    fn test_no_digit() {
        let result = validate_password("AbcdEfgh");
        assert!(!result.is_valid);
        assert!(
            result
                .errors
                .contains(&"Password must contain at least one digit")
        );
    }

    #[test]
    fn test_common_password() {
        let result = validate_password("Password1");
        assert!(!result.is_valid);
        assert!(
            result
                .errors
                .contains(&"Password is too common, please choose a stronger password")
        );
    }

    #[test]
    fn test_score_bounds() {
        assert!(validate_score(1).is_ok());
        assert!(validate_score(5).is_ok());
        assert!(validate_score(0).is_err());
        assert!(validate_score(6).is_err());
    }
}
