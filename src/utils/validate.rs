//! 注册表单的客户端预校验
//!
//! 服务端仍是最终权威；这里提前拦截明显非法的输入，
//! 避免一次注定失败的远程调用。

use once_cell::sync::Lazy;
use regex::Regex;

static USERNAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("Invalid username regex"));

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}$").expect("Invalid email regex")
});

pub fn validate_username(username: &str) -> Result<(), &'static str> {
    // 用户名长度校验：3 <= x <= 32
    if username.len() < 3 || username.len() > 32 {
        return Err("Username length must be between 3 and 32 characters");
    }
    // 用户名格式校验：只能包含字母、数字、下划线或连字符
    if !USERNAME_RE.is_match(username) {
        return Err("Username must contain only letters, numbers, underscores or hyphens");
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), &'static str> {
    if !EMAIL_RE.is_match(email) {
        return Err("Email format is invalid");
    }
    Ok(())
}

/// 密码基础校验：长度与字符类别
pub fn validate_password(password: &str) -> Result<(), &'static str> {
    if password.len() < 8 {
        return Err("Password must be at least 8 characters long");
    }
    if !password.chars().any(|c| c.is_ascii_alphabetic()) {
        return Err("Password must contain at least one letter");
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err("Password must contain at least one digit");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_username() {
        assert!(validate_username("alice_01").is_ok());
        assert!(validate_username("prof-kim").is_ok());
    }

    #[test]
    fn test_username_bad_characters() {
        assert!(validate_username("alice kim").is_err());
        assert!(validate_username("앨리스").is_err());
    }

    #[test]
    fn test_username_length() {
        assert!(validate_username("ab").is_err());
        assert!(validate_username(&"a".repeat(33)).is_err());
    }

    #[test]
    fn test_valid_email() {
        assert!(validate_email("alice@example.com").is_ok());
        assert!(validate_email("a.b+c@sub.example.org").is_ok());
    }

    #[test]
    fn test_invalid_email() {
        assert!(validate_email("alice").is_err());
        assert!(validate_email("alice@localhost").is_err());
    }

    #[test]
    fn test_password_rules() {
        assert!(validate_password("abcd1234").is_ok());
        assert!(validate_password("short1").is_err());
        assert!(validate_password("12345678").is_err());
        assert!(validate_password("abcdefgh").is_err());
    }
}
