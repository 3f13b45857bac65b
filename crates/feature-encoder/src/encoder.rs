//! Feature Vector Assembly

use crate::ColumnSchema;
use patient_intake::PatientRecord;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Feature vector for ML inference, aligned to a column schema: the value
/// at index `i` belongs to the schema's `i`-th column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    values: Vec<f64>,
}

impl FeatureVector {
    /// Build a vector from already schema-ordered values
    pub fn from_values(values: Vec<f64>) -> Self {
        Self { values }
    }

    /// Raw values in schema order
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of values
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the vector has no values
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value of a named column under the given schema
    pub fn get(&self, schema: &ColumnSchema, name: &str) -> Option<f64> {
        schema.position(name).and_then(|i| self.values.get(i)).copied()
    }
}

/// Encoder that maps patient records onto the expected column schema
#[derive(Debug, Default)]
pub struct FeatureEncoder;

impl FeatureEncoder {
    /// Create a new encoder
    pub fn new() -> Self {
        Self
    }

    /// Encode a record into a schema-aligned feature vector.
    ///
    /// Numeric attributes pass through into their named columns; each
    /// categorical contributes one presence column `<Attribute>_<Code>`
    /// set to 1. Every schema column not produced by the record is filled
    /// with 0, and the output order is exactly the schema order.
    pub fn encode(&self, record: &PatientRecord, schema: &ColumnSchema) -> FeatureVector {
        let produced: Vec<(String, f64)> = vec![
            ("Age".to_string(), record.age as f64),
            ("RestingBP".to_string(), record.resting_bp as f64),
            ("Cholesterol".to_string(), record.cholesterol as f64),
            ("FastingBS".to_string(), record.fasting_bs_flag()),
            ("MaxHR".to_string(), record.max_hr as f64),
            ("Oldpeak".to_string(), record.oldpeak),
            (format!("Sex_{}", record.sex.code()), 1.0),
            (format!("ChestPainType_{}", record.chest_pain.code()), 1.0),
            (format!("RestingECG_{}", record.resting_ecg.code()), 1.0),
            (format!("ExerciseAngina_{}", record.exercise_angina.code()), 1.0),
            (format!("ST_Slope_{}", record.st_slope.code()), 1.0),
        ];

        // A produced column missing from the schema is dropped from the
        // output (its attribute's indicators all stay 0), matching how the
        // artifacts were trained. Logged because the drop is otherwise
        // invisible to the caller.
        for (name, _) in &produced {
            if !schema.contains(name) {
                warn!("column {} not in expected schema, dropping", name);
            }
        }

        let values = schema
            .iter()
            .map(|col| {
                produced
                    .iter()
                    .find(|(name, _)| name == col)
                    .map(|(_, v)| *v)
                    .unwrap_or(0.0)
            })
            .collect::<Vec<f64>>();

        debug!(
            "Encoded {} produced columns into {} schema columns",
            produced.len(),
            values.len()
        );

        FeatureVector { values }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use patient_intake::{ChestPainType, ExerciseAngina, RestingEcg, Sex, StSlope};
    use proptest::prelude::*;

    /// Schema the heart classifier was trained against
    const HEART_COLUMNS: &[&str] = &[
        "Age",
        "RestingBP",
        "Cholesterol",
        "FastingBS",
        "MaxHR",
        "Oldpeak",
        "Sex_F",
        "Sex_M",
        "ChestPainType_ASY",
        "ChestPainType_ATA",
        "ChestPainType_NAP",
        "ChestPainType_TA",
        "RestingECG_LVH",
        "RestingECG_Normal",
        "RestingECG_ST",
        "ExerciseAngina_N",
        "ExerciseAngina_Y",
        "ST_Slope_Down",
        "ST_Slope_Flat",
        "ST_Slope_Up",
    ];

    fn heart_schema() -> ColumnSchema {
        ColumnSchema::from(HEART_COLUMNS)
    }

    fn reference_record() -> PatientRecord {
        PatientRecord {
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

    #[test]
    fn test_vector_matches_schema_width() {
        let schema = heart_schema();
        let vector = FeatureEncoder::new().encode(&reference_record(), &schema);
        assert_eq!(vector.len(), schema.len());
    }

    #[test]
    fn test_reference_record_encoding() {
        let schema = heart_schema();
        let vector = FeatureEncoder::new().encode(&reference_record(), &schema);

        assert_eq!(vector.get(&schema, "Age"), Some(40.0));
        assert_eq!(vector.get(&schema, "RestingBP"), Some(120.0));
        assert_eq!(vector.get(&schema, "Cholesterol"), Some(200.0));
        assert_eq!(vector.get(&schema, "FastingBS"), Some(0.0));
        assert_eq!(vector.get(&schema, "MaxHR"), Some(150.0));
        assert_eq!(vector.get(&schema, "Oldpeak"), Some(1.0));
        assert_eq!(vector.get(&schema, "Sex_M"), Some(1.0));
        assert_eq!(vector.get(&schema, "ChestPainType_ATA"), Some(1.0));
        assert_eq!(vector.get(&schema, "RestingECG_Normal"), Some(1.0));
        assert_eq!(vector.get(&schema, "ExerciseAngina_N"), Some(1.0));
        assert_eq!(vector.get(&schema, "ST_Slope_Up"), Some(1.0));

        // Everything else zero-filled
        assert_eq!(vector.get(&schema, "Sex_F"), Some(0.0));
        assert_eq!(vector.get(&schema, "ChestPainType_ASY"), Some(0.0));
        assert_eq!(vector.get(&schema, "ChestPainType_NAP"), Some(0.0));
        assert_eq!(vector.get(&schema, "ChestPainType_TA"), Some(0.0));
        assert_eq!(vector.get(&schema, "RestingECG_LVH"), Some(0.0));
        assert_eq!(vector.get(&schema, "RestingECG_ST"), Some(0.0));
        assert_eq!(vector.get(&schema, "ExerciseAngina_Y"), Some(0.0));
        assert_eq!(vector.get(&schema, "ST_Slope_Down"), Some(0.0));
        assert_eq!(vector.get(&schema, "ST_Slope_Flat"), Some(0.0));
    }

    #[test]
    fn test_encoding_is_idempotent() {
        let schema = heart_schema();
        let encoder = FeatureEncoder::new();
        let record = reference_record();
        let first = encoder.encode(&record, &schema);
        let second = encoder.encode(&record, &schema);
        assert_eq!(first, second);
    }

    #[test]
    fn test_category_missing_from_schema_leaves_indicators_zero() {
        // Schema without any Sex_F column: an F record must not set Sex_M
        // and must not produce anything outside the schema.
        let schema = ColumnSchema::from(
            ["Age", "Sex_M", "ST_Slope_Up", "ST_Slope_Flat", "ST_Slope_Down"].as_slice(),
        );
        let record = PatientRecord {
            sex: Sex::F,
            ..reference_record()
        };
        let vector = FeatureEncoder::new().encode(&record, &schema);

        assert_eq!(vector.len(), schema.len());
        assert_eq!(vector.get(&schema, "Sex_M"), Some(0.0));
        assert_eq!(vector.get(&schema, "ST_Slope_Up"), Some(1.0));
    }

    fn arb_record() -> impl Strategy<Value = PatientRecord> {
        (
            18u32..=100,
            80u32..=200,
            100u32..=600,
            60u32..=220,
            0.0f64..=6.0,
            any::<bool>(),
            0usize..2,
            0usize..4,
            0usize..3,
            0usize..2,
            0usize..3,
        )
            .prop_map(
                |(age, bp, chol, hr, oldpeak, fbs, sex, cp, ecg, angina, slope)| PatientRecord {
                    age,
                    sex: Sex::ALL[sex],
                    chest_pain: ChestPainType::ALL[cp],
                    resting_bp: bp,
                    cholesterol: chol,
                    fasting_bs: fbs,
                    resting_ecg: RestingEcg::ALL[ecg],
                    max_hr: hr,
                    exercise_angina: ExerciseAngina::ALL[angina],
                    oldpeak,
                    st_slope: StSlope::ALL[slope],
                },
            )
    }

    proptest! {
        #[test]
        fn prop_alignment_holds_for_all_records(record in arb_record()) {
            let schema = heart_schema();
            let vector = FeatureEncoder::new().encode(&record, &schema);

            prop_assert_eq!(vector.len(), schema.len());

            // Exactly one indicator set per categorical attribute
            for prefix in ["Sex_", "ChestPainType_", "RestingECG_", "ExerciseAngina_", "ST_Slope_"] {
                let set: f64 = schema
                    .iter()
                    .filter(|c| c.starts_with(prefix))
                    .map(|c| vector.get(&schema, c).unwrap())
                    .sum();
                prop_assert_eq!(set, 1.0);
            }
        }
    }
}
