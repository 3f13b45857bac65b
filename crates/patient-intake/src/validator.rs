//! Record Validation for Range Checking

use crate::{IntakeError, PatientRecord};
use serde::{Deserialize, Serialize};

/// Bounds for the numeric form inputs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntakeLimits {
    /// Age valid range (years)
    pub age_range: (f64, f64),
    /// Resting blood pressure valid range (mm Hg)
    pub resting_bp_range: (f64, f64),
    /// Cholesterol valid range (mg/dL)
    pub cholesterol_range: (f64, f64),
    /// Maximum heart rate valid range (bpm)
    pub max_hr_range: (f64, f64),
    /// Oldpeak valid range
    pub oldpeak_range: (f64, f64),
}

impl Default for IntakeLimits {
    fn default() -> Self {
        Self {
            age_range: (18.0, 100.0),
            resting_bp_range: (80.0, 200.0),
            cholesterol_range: (100.0, 600.0),
            max_hr_range: (60.0, 220.0),
            oldpeak_range: (0.0, 6.0),
        }
    }
}

/// Validator for patient records
pub struct Validator {
    limits: IntakeLimits,
}

impl Validator {
    /// Create a new validator with given limits
    pub fn new(limits: IntakeLimits) -> Self {
        Self { limits }
    }

    /// Validate a single value against a range
    pub fn validate_range(
        &self,
        field: &'static str,
        value: f64,
        range: (f64, f64),
    ) -> Result<(), IntakeError> {
        if value < range.0 || value > range.1 {
            Err(IntakeError::OutOfRange {
                field,
                value,
                min: range.0,
                max: range.1,
            })
        } else {
            Ok(())
        }
    }

    /// Validate age
    pub fn validate_age(&self, age: f64) -> Result<(), IntakeError> {
        self.validate_range("age", age, self.limits.age_range)
    }

    /// Validate resting blood pressure
    pub fn validate_resting_bp(&self, bp: f64) -> Result<(), IntakeError> {
        self.validate_range("resting_bp", bp, self.limits.resting_bp_range)
    }

    /// Validate cholesterol
    pub fn validate_cholesterol(&self, chol: f64) -> Result<(), IntakeError> {
        self.validate_range("cholesterol", chol, self.limits.cholesterol_range)
    }

    /// Validate maximum heart rate
    pub fn validate_max_hr(&self, hr: f64) -> Result<(), IntakeError> {
        self.validate_range("max_hr", hr, self.limits.max_hr_range)
    }

    /// Validate oldpeak
    pub fn validate_oldpeak(&self, oldpeak: f64) -> Result<(), IntakeError> {
        self.validate_range("oldpeak", oldpeak, self.limits.oldpeak_range)
    }

    /// Validate every numeric field of a record
    pub fn validate(&self, record: &PatientRecord) -> Result<(), IntakeError> {
        self.validate_age(record.age as f64)?;
        self.validate_resting_bp(record.resting_bp as f64)?;
        self.validate_cholesterol(record.cholesterol as f64)?;
        self.validate_max_hr(record.max_hr as f64)?;
        self.validate_oldpeak(record.oldpeak)?;
        Ok(())
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new(IntakeLimits::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_age_bounds_accepted() {
        let validator = Validator::default();
        assert!(validator.validate_age(18.0).is_ok());
        assert!(validator.validate_age(40.0).is_ok());
        assert!(validator.validate_age(100.0).is_ok());
    }

    #[test]
    fn test_age_out_of_range() {
        let validator = Validator::default();
        assert!(validator.validate_age(17.0).is_err());
        assert!(validator.validate_age(101.0).is_err());
    }

    #[test]
    fn test_oldpeak_bounds_accepted() {
        let validator = Validator::default();
        assert!(validator.validate_oldpeak(0.0).is_ok());
        assert!(validator.validate_oldpeak(6.0).is_ok());
        assert!(validator.validate_oldpeak(-0.1).is_err());
        assert!(validator.validate_oldpeak(6.1).is_err());
    }

    #[test]
    fn test_default_record_validates() {
        let validator = Validator::default();
        assert!(validator.validate(&PatientRecord::default()).is_ok());
    }

    #[test]
    fn test_out_of_range_names_field() {
        let validator = Validator::default();
        let mut record = PatientRecord::default();
        record.cholesterol = 900;
        let err = validator.validate(&record).unwrap_err();
        assert!(err.to_string().contains("cholesterol"));
    }

    proptest! {
        #[test]
        fn prop_in_range_values_accepted(
            age in 18u32..=100,
            bp in 80u32..=200,
            chol in 100u32..=600,
            hr in 60u32..=220,
            oldpeak in 0.0f64..=6.0,
        ) {
            let validator = Validator::default();
            let record = PatientRecord {
                age,
                resting_bp: bp,
                cholesterol: chol,
                max_hr: hr,
                oldpeak,
                ..PatientRecord::default()
            };
            prop_assert!(validator.validate(&record).is_ok());
        }
    }
}
