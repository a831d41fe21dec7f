//! Field limits and validation helpers for issue and category input.
//!
//! The limits mirror the column sizes in the database schema.

/// Maximum issue title length in characters (`VARCHAR(80)`).
pub const MAX_TITLE_LEN: usize = 80;

/// Maximum category name length in characters (`VARCHAR(20)`).
pub const MAX_CATEGORY_NAME_LEN: usize = 20;

/// Maximum username length in characters (`VARCHAR(150)`).
pub const MAX_USERNAME_LEN: usize = 150;

/// Minimum password length for new accounts.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Validate that a required text field is non-blank and within `max_len` characters.
pub fn validate_required_text(field: &str, value: &str, max_len: Option<usize>) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("{field} must not be blank"));
    }
    if let Some(max) = max_len {
        let len = value.chars().count();
        if len > max {
            return Err(format!(
                "{field} must be at most {max} characters, got {len}"
            ));
        }
    }
    Ok(())
}

/// Validate an issue title.
pub fn validate_title(title: &str) -> Result<(), String> {
    validate_required_text("title", title, Some(MAX_TITLE_LEN))
}

/// Validate an issue description.
pub fn validate_description(description: &str) -> Result<(), String> {
    validate_required_text("description", description, None)
}

/// Validate a category name.
pub fn validate_category_name(name: &str) -> Result<(), String> {
    validate_required_text("name", name, Some(MAX_CATEGORY_NAME_LEN))
}

/// Validate that a password meets the minimum length.
pub fn validate_password_strength(password: &str) -> Result<(), String> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters long"
        ));
    }
    Ok(())
}
