//! Input validation functions
//!
//! Range and length checks live on the request types (`validator` derive);
//! the functions here cover rules the derive cannot express.

/// Maximum username length (matches the `users.username` column)
pub const MAX_USERNAME_LEN: usize = 80;

/// Validate username format: 1-80 chars of letters, digits, `_`, `-`, `.`
pub fn validate_username(username: &str) -> Result<(), String> {
    if username.trim().is_empty() {
        return Err("Username cannot be empty".to_string());
    }
    if username.chars().count() > MAX_USERNAME_LEN {
        return Err(format!("Username must be at most {} characters", MAX_USERNAME_LEN));
    }
    let username_regex = regex_lite::Regex::new(r"^[A-Za-z0-9_.\-]+$")
        .map_err(|e| format!("Invalid username pattern: {}", e))?;
    if !username_regex.is_match(username) {
        return Err(
            "Username may only contain letters, digits, '_', '-' and '.'".to_string(),
        );
    }
    Ok(())
}

/// Validate password length in characters (8-128)
pub fn validate_password(password: &str) -> Result<(), String> {
    let chars = password.chars().count();
    if chars < 8 {
        return Err("Password must be at least 8 characters".to_string());
    }
    if chars > 128 {
        return Err("Password too long".to_string());
    }
    Ok(())
}

/// Reject strings that are empty once trimmed
pub fn validate_not_blank(field: &str, value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("{} cannot be empty", field));
    }
    Ok(())
}

/// Parse an `is_vegetarian` style query flag. Anything other than
/// `true`/`false` (any case) yields `None`.
pub fn parse_bool_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("alice")]
    #[case("bob_the-builder.2")]
    #[case("X")]
    fn test_valid_usernames(#[case] username: &str) {
        assert!(validate_username(username).is_ok());
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("has space")]
    #[case("semi;colon")]
    fn test_invalid_usernames(#[case] username: &str) {
        assert!(validate_username(username).is_err());
    }

    #[test]
    fn test_username_too_long() {
        let username = "a".repeat(MAX_USERNAME_LEN + 1);
        assert!(validate_username(&username).is_err());
        assert!(validate_username(&"a".repeat(MAX_USERNAME_LEN)).is_ok());
    }

    #[test]
    fn test_password_length() {
        assert!(validate_password("short").is_err());
        assert!(validate_password("long enough").is_ok());
        assert!(validate_password(&"p".repeat(129)).is_err());
    }

    #[test]
    fn test_password_length_counts_characters() {
        // 100 four-byte characters: 400 bytes but within the limit
        assert!(validate_password(&"🏋".repeat(100)).is_ok());
        assert!(validate_password(&"é".repeat(7)).is_err());
        assert!(validate_password(&"é".repeat(128)).is_ok());
    }

    #[test]
    fn test_not_blank() {
        assert!(validate_not_blank("recipe_name", "  ").is_err());
        assert!(validate_not_blank("recipe_name", "Dal").is_ok());
    }

    #[rstest]
    #[case("true", Some(true))]
    #[case("TRUE", Some(true))]
    #[case("False", Some(false))]
    #[case("yes", None)]
    #[case("1", None)]
    fn test_parse_bool_flag(#[case] input: &str, #[case] expected: Option<bool>) {
        assert_eq!(parse_bool_flag(input), expected);
    }
}
