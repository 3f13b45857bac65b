//! Feature Encoding
//!
//! Maps a patient record onto the fixed-width, fixed-order feature vector
//! the fitted artifacts were trained against: numeric passthrough, one-hot
//! presence columns for the categoricals, zero-fill for everything else.

mod encoder;
mod schema;

pub use encoder::{FeatureEncoder, FeatureVector};
pub use schema::ColumnSchema;
