//! Input checks performed by presentation surfaces before calling the store.
//!
//! The store itself accepts any well-typed value; these helpers are the only
//! place the username, friend name, roast text and template rules live.

use crate::constants::MIN_USERNAME_LEN;
use crate::error::ValidationError;
use crate::templates::has_placeholder;

pub fn validate_username(username: &str) -> Result<&str, ValidationError> {
    if username.trim().is_empty() {
        return Err(ValidationError::EmptyUsername);
    }
    if username.chars().count() < MIN_USERNAME_LEN {
        return Err(ValidationError::UsernameTooShort {
            min: MIN_USERNAME_LEN,
        });
    }
    Ok(username)
}

pub fn validate_friend_name(name: &str) -> Result<&str, ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::EmptyFriendName);
    }
    Ok(name)
}

pub fn validate_roast_text(text: &str) -> Result<&str, ValidationError> {
    if text.trim().is_empty() {
        return Err(ValidationError::EmptyRoast);
    }
    Ok(text)
}

/// A custom template must be non-blank and contain `{name}`.
pub fn validate_template(template: &str) -> Result<&str, ValidationError> {
    validate_roast_text(template)?;
    if !has_placeholder(template) {
        return Err(ValidationError::MissingPlaceholder);
    }
    Ok(template)
}
