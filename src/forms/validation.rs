use std::str::FromStr;

use crate::api::MetricKind;
use crate::error::FieldError;

pub const STAT_TYPE_REQUIRED: &str = "add_entry.validation.stat_type_required";
pub const STAT_TYPE_UNKNOWN: &str = "add_entry.validation.stat_type_unknown";
pub const VALUE_REQUIRED: &str = "add_entry.validation.value_required";
pub const VALUE_POSITIVE: &str = "add_entry.validation.value_positive";

pub fn parse_stat_type(field: &'static str, raw: &str) -> Result<MetricKind, FieldError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(FieldError::new(field, STAT_TYPE_REQUIRED));
    }
    MetricKind::from_str(raw).map_err(|_| FieldError::new(field, STAT_TYPE_UNKNOWN))
}

/// A finite number strictly greater than zero.
pub fn parse_positive_value(field: &'static str, raw: &str) -> Result<f64, FieldError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(FieldError::new(field, VALUE_REQUIRED));
    }
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => Ok(value),
        _ => Err(FieldError::new(field, VALUE_POSITIVE)),
    }
}
