//! Message content validation.

/// Maximum message length in characters, after trimming.
pub const MAX_MESSAGE_CHARS: usize = 5000;

/// Reasons a raw message body is rejected.
///
/// Always user-correctable: surfaced to the caller, never retried
/// automatically.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The trimmed content is empty.
    #[error("message cannot be empty")]
    EmptyContent,
    /// The trimmed content exceeds [`MAX_MESSAGE_CHARS`] characters.
    #[error("message must be at most {MAX_MESSAGE_CHARS} characters (got {0})")]
    TooLong(usize),
}

/// Normalize and bounds-check a raw message body.
///
/// Trims surrounding whitespace and enforces 1..=5000 characters. Pure and
/// deterministic, so it runs identically on every caller and can be
/// re-applied in front of untrusted clients as a defense-in-depth check.
/// Validation happens before any storage mutation, so rejected input never
/// produces partial state.
pub fn validate_message(raw: &str) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyContent);
    }
    let chars = trimmed.chars().count();
    if chars > MAX_MESSAGE_CHARS {
        return Err(ValidationError::TooLong(chars));
    }
    Ok(trimmed.to_owned())
}
