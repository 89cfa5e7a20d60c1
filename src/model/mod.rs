//! API data transfer objects shared by the HTTP layer.
//!
//! Request DTOs derive `Validate` so the controller extractors can reject malformed
//! input before any service call. Responses come in two tiers: a summary (no relations)
//! and a detail carrying one level of summaries of the other side.

pub mod course;
pub mod student;

use validator::ValidationError;

/// Rejects strings that are empty or consist only of whitespace.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_blank");
        error.message = Some("must not be blank".into());
        return Err(error);
    }

    Ok(())
}
