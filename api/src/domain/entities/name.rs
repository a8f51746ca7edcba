//! Name rules shared by shops and products

use crate::error::DomainError;

/// Longest name a shop or product may carry, in characters
pub const MAX_NAME_LEN: usize = 30;

/// Check that `name` is between 1 and [`MAX_NAME_LEN`] characters.
///
/// `kind` is used in the diagnostic ("Shop name", "Product name").
pub fn validate_name(kind: &str, name: &str) -> Result<(), DomainError> {
    let len = name.chars().count();
    if len == 0 || len > MAX_NAME_LEN {
        return Err(DomainError::Validation(format!(
            "{} must be between 1 and {} characters, got {}",
            kind, MAX_NAME_LEN, len
        )));
    }
    Ok(())
}
