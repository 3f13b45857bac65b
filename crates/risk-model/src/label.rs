//! Risk Label and Result Messages

use serde::{Deserialize, Serialize};

/// Binary risk label produced by the classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLabel {
    /// Class 0: low risk
    Low,
    /// Class 1: heart disease risk detected
    High,
}

impl RiskLabel {
    /// Map the classifier's output class to a label
    pub fn from_class(class: i32) -> Self {
        if class == 1 {
            RiskLabel::High
        } else {
            RiskLabel::Low
        }
    }

    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLabel::Low => "low",
            RiskLabel::High => "high",
        }
    }

    /// Fixed headline message for this label
    pub fn headline(&self) -> &'static str {
        match self {
            RiskLabel::Low => "Low Risk of Heart Disease Detected",
            RiskLabel::High => "High Risk of Heart Disease Detected",
        }
    }

    /// Fixed advisory paragraph for this label
    pub fn advisory(&self) -> &'static str {
        match self {
            RiskLabel::Low => {
                "While the risk appears low, maintain a healthy lifestyle and \
                 regular check-ups. This prediction is for informational \
                 purposes only."
            }
            RiskLabel::High => {
                "Please consult a healthcare professional for a thorough \
                 evaluation. This prediction is based on machine learning and \
                 should not be considered as a medical diagnosis."
            }
        }
    }
}

/// Rendered result of one inference pass: the label and its two fixed
/// message templates, nothing else. No probability or confidence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// Binary label
    pub label: RiskLabel,
    /// Headline message
    pub headline: String,
    /// Advisory paragraph
    pub advisory: String,
}

impl From<RiskLabel> for RiskAssessment {
    fn from(label: RiskLabel) -> Self {
        Self {
            label,
            headline: label.headline().to_string(),
            advisory: label.advisory().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_mapping() {
        assert_eq!(RiskLabel::from_class(0), RiskLabel::Low);
        assert_eq!(RiskLabel::from_class(1), RiskLabel::High);
        // Anything that is not class 1 renders the low-risk message
        assert_eq!(RiskLabel::from_class(-1), RiskLabel::Low);
    }

    #[test]
    fn test_exactly_two_messages() {
        let low = RiskAssessment::from(RiskLabel::Low);
        let high = RiskAssessment::from(RiskLabel::High);
        assert_ne!(low.headline, high.headline);
        assert!(low.headline.contains("Low Risk"));
        assert!(high.headline.contains("High Risk"));
    }
}
