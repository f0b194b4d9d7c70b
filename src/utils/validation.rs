use crate::utils::error::{BootcampError, Result};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Output formats the plot pipeline knows how to write.
pub const SUPPORTED_FORMATS: [&str; 3] = ["svg", "csv", "json"];

/// Highest expansion order whose factorial is still finite as `f64`.
pub const MAX_ORDER: u32 = 170;

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(BootcampError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(BootcampError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(BootcampError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_formats(field_name: &str, formats: &[String], allowed: &[&str]) -> Result<()> {
    let allowed_set: HashSet<&str> = allowed.iter().copied().collect();

    if formats.is_empty() {
        return Err(BootcampError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: String::new(),
            reason: "At least one output format is required".to_string(),
        });
    }

    for format in formats {
        if !allowed_set.contains(format.as_str()) {
            return Err(BootcampError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: format.clone(),
                reason: format!("Unsupported format. Valid formats: {}", allowed.join(", ")),
            });
        }
    }

    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| BootcampError::MissingConfigError {
        field: field_name.to_string(),
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(BootcampError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(BootcampError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

/// Checks a sampling interval: both ends finite and `start < stop`.
pub fn validate_interval(field_name: &str, start: f64, stop: f64) -> Result<()> {
    if !start.is_finite() || !stop.is_finite() || start >= stop {
        return Err(BootcampError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: format!("[{}, {}]", start, stop),
            reason: "Interval must be finite with start < stop".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("output_path", "./output").is_ok());
        assert!(validate_path("output_path", "").is_err());
        assert!(validate_path("output_path", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("grid.points", 100, 2).is_ok());
        assert!(validate_positive_number("grid.points", 1, 2).is_err());
    }

    #[test]
    fn test_validate_formats() {
        let formats = vec!["svg".to_string(), "csv".to_string()];
        assert!(validate_formats("output_formats", &formats, &SUPPORTED_FORMATS).is_ok());

        let invalid = vec!["png".to_string()];
        assert!(validate_formats("output_formats", &invalid, &SUPPORTED_FORMATS).is_err());
        assert!(validate_formats("output_formats", &[], &SUPPORTED_FORMATS).is_err());
    }

    #[test]
    fn test_validate_range_and_interval() {
        assert!(validate_range("taylor.order", 10, 0, MAX_ORDER).is_ok());
        assert!(validate_range("taylor.order", 171, 0, MAX_ORDER).is_err());
        assert!(validate_interval("grid", 0.0, 10.0).is_ok());
        assert!(validate_interval("grid", 10.0, 0.0).is_err());
        assert!(validate_interval("grid", 0.0, f64::NAN).is_err());
    }

    #[test]
    fn test_validate_required_field() {
        let present = Some(3);
        let absent: Option<i32> = None;
        assert_eq!(*validate_required_field("taylor.order", &present).unwrap(), 3);
        assert!(validate_required_field("taylor.order", &absent).is_err());
    }
}
