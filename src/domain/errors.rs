// ============================================================================
// Validation Error Taxonomy
// ============================================================================
//
// Every validator and aggregate constructor reports failures with one of
// four kinds, tagged with the offending field (or entity) name.
//
// Aggregate errors wrap the taxonomy in a `Validation` variant. Command
// handlers unwrap it again before returning, so callers always see a bare
// `ValidationError`.
//
// ============================================================================

use crate::domain::area::AreaError;
use crate::domain::farm::FarmError;
use crate::domain::material::MaterialError;
use crate::domain::reservoir::ReservoirError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Empty or missing value
    #[error("REQUIRED: {0}")]
    Required(&'static str),

    /// Value not in the allowed set
    #[error("INVALID_OPTION: {0}")]
    InvalidOption(&'static str),

    /// Malformed numeric, date or enum text
    #[error("PARSE_FAILED: {0}")]
    ParseFailed(&'static str),

    /// Referenced entity is absent
    #[error("NOT_FOUND: {0}")]
    NotFound(&'static str),
}

impl ValidationError {
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::Required(_) => "REQUIRED",
            ValidationError::InvalidOption(_) => "INVALID_OPTION",
            ValidationError::ParseFailed(_) => "PARSE_FAILED",
            ValidationError::NotFound(_) => "NOT_FOUND",
        }
    }

    /// Field or entity name the failure is tagged with
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::Required(field)
            | ValidationError::InvalidOption(field)
            | ValidationError::ParseFailed(field)
            | ValidationError::NotFound(field) => field,
        }
    }
}

/// The taxonomy entry carried by `err`, whether bare or wrapped in one of
/// the aggregate error types
pub fn validation_error(err: &anyhow::Error) -> Option<ValidationError> {
    if let Some(validation) = err.downcast_ref::<ValidationError>() {
        return Some(*validation);
    }
    if let Some(FarmError::Validation(validation)) = err.downcast_ref::<FarmError>() {
        return Some(*validation);
    }
    if let Some(ReservoirError::Validation(validation)) = err.downcast_ref::<ReservoirError>() {
        return Some(*validation);
    }
    if let Some(AreaError::Validation(validation)) = err.downcast_ref::<AreaError>() {
        return Some(*validation);
    }
    if let Some(MaterialError::Validation(validation)) = err.downcast_ref::<MaterialError>() {
        return Some(*validation);
    }
    None
}

/// Replace a wrapped taxonomy entry with the bare `ValidationError`; any
/// other failure passes through unchanged
pub(crate) fn surface_validation(err: anyhow::Error) -> anyhow::Error {
    match validation_error(&err) {
        Some(validation) => validation.into(),
        None => err,
    }
}

/// Trimmed, non-empty text or `REQUIRED(field)`
pub(crate) fn require_text(raw: &str, field: &'static str) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Required(field));
    }
    Ok(trimmed.to_string())
}

/// Finite number parsed from `raw`; empty text is `REQUIRED`, junk is `PARSE_FAILED`
pub(crate) fn parse_number(raw: &str, field: &'static str) -> Result<f64, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Required(field));
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ValidationError::ParseFailed(field)),
    }
}
