//! Full-name formatting rule.

use super::errors::ValidationError;

/// Connector words allowed inside a name, but only in lowercase.
const LOWERCASE_PREPOSITIONS: [&str; 4] = ["de", "do", "da", "e"];

/// Check whether `name` is a properly formatted full name.
///
/// A valid name has at least two words separated by ASCII whitespace. Each
/// word either is one of the prepositions `de`, `do`, `da`, `e` written
/// entirely in lowercase, or starts with an uppercase letter. A preposition in
/// any other casing ("De", "DA") is rejected.
///
/// # Example
///
/// ```
/// use contact_book_server::domain::is_valid_name;
///
/// assert!(is_valid_name("Maria da Silva"));
/// assert!(!is_valid_name("João De Silva"));
/// assert!(!is_valid_name("João"));
/// ```
pub fn is_valid_name(name: &str) -> bool {
    let parts: Vec<&str> = name.split_ascii_whitespace().collect();

    if parts.len() < 2 {
        return false;
    }

    parts.iter().all(|part| is_valid_part(part))
}

fn is_valid_part(part: &str) -> bool {
    let lowered = part.to_lowercase();

    if LOWERCASE_PREPOSITIONS.contains(&lowered.as_str()) {
        return part == lowered;
    }

    part.chars().next().is_some_and(char::is_uppercase)
}

/// Validate a submitted name, returning it unchanged when it passes.
pub fn validate_name(name: &str) -> Result<&str, ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::Required("name"));
    }
    if !is_valid_name(name) {
        return Err(ValidationError::InvalidName(name.to_string()));
    }
    Ok(name)
}
