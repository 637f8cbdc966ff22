use crate::utils::error::{Result, ZooError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ZooError::InvalidConfigValueError {
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
        return Err(ZooError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

/// Rejects NaN, infinities and negative lengths.
pub fn validate_measurement(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(ZooError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Measurement must be a finite number".to_string(),
        });
    }
    if value < 0.0 {
        return Err(ZooError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Measurement cannot be negative".to_string(),
        });
    }
    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| ZooError::MissingConfigError {
        field: field_name.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("name", "Simba").is_ok());
        assert!(validate_non_empty_string("name", "").is_err());
        assert!(validate_non_empty_string("name", "   ").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("age", 5u32, 0, 200).is_ok());
        assert!(validate_range("age", 200u32, 0, 200).is_ok());
        assert!(validate_range("age", 201u32, 0, 200).is_err());
    }

    #[test]
    fn test_validate_measurement() {
        assert!(validate_measurement("wingspan", 15.0).is_ok());
        assert!(validate_measurement("wingspan", 0.0).is_ok());
        assert!(validate_measurement("wingspan", -1.0).is_err());
        assert!(validate_measurement("wingspan", f64::NAN).is_err());
        assert!(validate_measurement("wingspan", f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_required_field() {
        let present = Some(3u32);
        let missing: Option<u32> = None;
        assert_eq!(*validate_required_field("age", &present).unwrap(), 3);
        assert!(matches!(
            validate_required_field("age", &missing),
            Err(ZooError::MissingConfigError { .. })
        ));
    }
}
