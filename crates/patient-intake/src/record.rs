//! Patient Record and Categorical Codes
//!
//! Each categorical attribute is an explicit enum with a direct mapping
//! between its schema code (the suffix used in one-hot column names) and
//! the display label shown on the form. No substring slicing of labels.

use crate::IntakeError;
use serde::{Deserialize, Serialize};

/// Patient sex
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sex {
    M,
    F,
}

impl Sex {
    /// All variants, in form display order
    pub const ALL: [Sex; 2] = [Sex::M, Sex::F];

    /// Schema code used in one-hot column names
    pub fn code(&self) -> &'static str {
        match self {
            Sex::M => "M",
            Sex::F => "F",
        }
    }

    /// Display label shown on the form
    pub fn label(&self) -> &'static str {
        match self {
            Sex::M => "M",
            Sex::F => "F",
        }
    }

    /// Parse a schema code
    pub fn from_code(code: &str) -> Result<Self, IntakeError> {
        Self::ALL
            .into_iter()
            .find(|v| v.code() == code)
            .ok_or_else(|| IntakeError::UnknownCode {
                attribute: "sex",
                code: code.to_string(),
            })
    }
}

/// Chest pain type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChestPainType {
    /// Typical angina
    #[serde(rename = "ATA")]
    Ata,
    /// Non-anginal pain
    #[serde(rename = "NAP")]
    Nap,
    /// Atypical angina
    #[serde(rename = "TA")]
    Ta,
    /// Asymptomatic
    #[serde(rename = "ASY")]
    Asy,
}

impl ChestPainType {
    /// All variants, in form display order
    pub const ALL: [ChestPainType; 4] = [
        ChestPainType::Ata,
        ChestPainType::Nap,
        ChestPainType::Ta,
        ChestPainType::Asy,
    ];

    /// Schema code used in one-hot column names
    pub fn code(&self) -> &'static str {
        match self {
            ChestPainType::Ata => "ATA",
            ChestPainType::Nap => "NAP",
            ChestPainType::Ta => "TA",
            ChestPainType::Asy => "ASY",
        }
    }

    /// Display label shown on the form
    pub fn label(&self) -> &'static str {
        match self {
            ChestPainType::Ata => "ATA (Typical Angina)",
            ChestPainType::Nap => "NAP (Non-Anginal Pain)",
            ChestPainType::Ta => "TA (Atypical Angina)",
            ChestPainType::Asy => "ASY (Asymptomatic)",
        }
    }

    /// Parse a schema code
    pub fn from_code(code: &str) -> Result<Self, IntakeError> {
        Self::ALL
            .into_iter()
            .find(|v| v.code() == code)
            .ok_or_else(|| IntakeError::UnknownCode {
                attribute: "chest_pain",
                code: code.to_string(),
            })
    }

    /// Parse a display label
    pub fn from_label(label: &str) -> Result<Self, IntakeError> {
        Self::ALL
            .into_iter()
            .find(|v| v.label() == label)
            .ok_or_else(|| IntakeError::UnknownLabel {
                attribute: "chest_pain",
                label: label.to_string(),
            })
    }
}

/// Resting ECG result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RestingEcg {
    Normal,
    /// ST-T wave abnormality
    #[serde(rename = "ST")]
    St,
    /// Left ventricular hypertrophy
    #[serde(rename = "LVH")]
    Lvh,
}

impl RestingEcg {
    /// All variants, in form display order
    pub const ALL: [RestingEcg; 3] = [RestingEcg::Normal, RestingEcg::St, RestingEcg::Lvh];

    /// Schema code used in one-hot column names
    pub fn code(&self) -> &'static str {
        match self {
            RestingEcg::Normal => "Normal",
            RestingEcg::St => "ST",
            RestingEcg::Lvh => "LVH",
        }
    }

    /// Display label shown on the form
    pub fn label(&self) -> &'static str {
        match self {
            RestingEcg::Normal => "Normal",
            RestingEcg::St => "ST Abnormality (ST)",
            RestingEcg::Lvh => "Left Ventricular Hypertrophy (LVH)",
        }
    }

    /// Parse a schema code
    pub fn from_code(code: &str) -> Result<Self, IntakeError> {
        Self::ALL
            .into_iter()
            .find(|v| v.code() == code)
            .ok_or_else(|| IntakeError::UnknownCode {
                attribute: "resting_ecg",
                code: code.to_string(),
            })
    }

    /// Parse a display label
    pub fn from_label(label: &str) -> Result<Self, IntakeError> {
        Self::ALL
            .into_iter()
            .find(|v| v.label() == label)
            .ok_or_else(|| IntakeError::UnknownLabel {
                attribute: "resting_ecg",
                label: label.to_string(),
            })
    }
}

/// Exercise-induced angina
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExerciseAngina {
    N,
    Y,
}

impl ExerciseAngina {
    /// All variants, in form display order
    pub const ALL: [ExerciseAngina; 2] = [ExerciseAngina::N, ExerciseAngina::Y];

    /// Schema code used in one-hot column names
    pub fn code(&self) -> &'static str {
        match self {
            ExerciseAngina::N => "N",
            ExerciseAngina::Y => "Y",
        }
    }

    /// Display label shown on the form
    pub fn label(&self) -> &'static str {
        match self {
            ExerciseAngina::N => "No (N)",
            ExerciseAngina::Y => "Yes (Y)",
        }
    }

    /// Parse a schema code
    pub fn from_code(code: &str) -> Result<Self, IntakeError> {
        Self::ALL
            .into_iter()
            .find(|v| v.code() == code)
            .ok_or_else(|| IntakeError::UnknownCode {
                attribute: "exercise_angina",
                code: code.to_string(),
            })
    }

    /// Parse a display label
    pub fn from_label(label: &str) -> Result<Self, IntakeError> {
        Self::ALL
            .into_iter()
            .find(|v| v.label() == label)
            .ok_or_else(|| IntakeError::UnknownLabel {
                attribute: "exercise_angina",
                label: label.to_string(),
            })
    }
}

/// Slope of the peak exercise ST segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StSlope {
    Up,
    Flat,
    Down,
}

impl StSlope {
    /// All variants, in form display order
    pub const ALL: [StSlope; 3] = [StSlope::Up, StSlope::Flat, StSlope::Down];

    /// Schema code used in one-hot column names
    pub fn code(&self) -> &'static str {
        match self {
            StSlope::Up => "Up",
            StSlope::Flat => "Flat",
            StSlope::Down => "Down",
        }
    }

    /// Display label shown on the form
    pub fn label(&self) -> &'static str {
        self.code()
    }

    /// Parse a schema code
    pub fn from_code(code: &str) -> Result<Self, IntakeError> {
        Self::ALL
            .into_iter()
            .find(|v| v.code() == code)
            .ok_or_else(|| IntakeError::UnknownCode {
                attribute: "st_slope",
                code: code.to_string(),
            })
    }
}

/// One patient's form selections, created per analyze request and
/// discarded after the result is rendered
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientRecord {
    /// Age in years
    pub age: u32,
    /// Patient sex
    pub sex: Sex,
    /// Chest pain type
    pub chest_pain: ChestPainType,
    /// Resting blood pressure (mm Hg)
    pub resting_bp: u32,
    /// Serum cholesterol (mg/dL)
    pub cholesterol: u32,
    /// Fasting blood sugar > 120 mg/dL
    pub fasting_bs: bool,
    /// Resting ECG result
    pub resting_ecg: RestingEcg,
    /// Maximum heart rate achieved
    pub max_hr: u32,
    /// Exercise-induced angina
    pub exercise_angina: ExerciseAngina,
    /// ST depression induced by exercise relative to rest
    pub oldpeak: f64,
    /// ST slope
    pub st_slope: StSlope,
}

impl PatientRecord {
    /// Fasting blood sugar flag as the 0/1 feature value
    pub fn fasting_bs_flag(&self) -> f64 {
        if self.fasting_bs {
            1.0
        } else {
            0.0
        }
    }
}

impl Default for PatientRecord {
    /// Form defaults: the values the page is pre-populated with
    fn default() -> Self {
        Self {
            age: 40,
            sex: Sex::M,
            chest_pain: ChestPainType::Ata,
            resting_bp: 120,
            cholesterol: 200,
            fasting_bs: false,
            resting_ecg: RestingEcg::Normal,
            max_hr: 150,
            exercise_angina: ExerciseAngina::N,
            oldpeak: 1.0,
            st_slope: StSlope::Up,
        }
    }
}
