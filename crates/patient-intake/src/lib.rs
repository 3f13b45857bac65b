//! Patient Intake
//!
//! Provides the patient record collected by the form surface, explicit
//! categorical code types, and range validation for the numeric fields.

mod error;
mod record;
mod validator;

pub use error::IntakeError;
pub use record::{ChestPainType, ExerciseAngina, PatientRecord, RestingEcg, Sex, StSlope};
pub use validator::{IntakeLimits, Validator};
