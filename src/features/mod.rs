//! Feature preparation: schema resolution (load time) and row building (per call).

pub mod builder;
pub mod schema;

pub use builder::{FeatureRow, build_feature_row, loan_to_income};
pub use schema::{FeatureSchema, NumericFeature};
