use crate::utils::error::{Result, ShippingError};

pub fn validate_required_text<'a>(field_name: &str, value: Option<&'a str>) -> Result<&'a str> {
    let text = value.ok_or_else(|| ShippingError::InvalidArgument {
        reason: format!("{} is mandatory and was not provided", field_name),
    })?;

    if text.trim().is_empty() {
        return Err(ShippingError::InvalidArgument {
            reason: format!("{} cannot be empty or whitespace-only", field_name),
        });
    }

    Ok(text)
}

pub fn validate_non_negative(field_name: &str, value: i64) -> Result<i64> {
    if value < 0 {
        return Err(ShippingError::InvalidArgument {
            reason: format!("{} must not be negative (got {})", field_name, value),
        });
    }
    Ok(value)
}

/// Trims optional free text; absent, empty and blank all collapse to `None`.
pub fn normalize_optional_text(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_string)
}
