//! # AquaSentinel Risk
//!
//! Contamination risk scoring for groundwater regions.
//!
//! - [`RiskScorer`] turns a classifier's discrete label and class
//!   probabilities into a continuous 0-100 score.
//! - [`exceedance`] / [`times_over_limit`] compare concentrations against
//!   the fixed safe limits.
//! - [`build_alerts`] assembles the ordered alert feed for critical and
//!   high-risk regions.
//!
//! The classifier is a capability chosen once at startup: a trained model
//! behind [`RemoteRiskClassifier`], or the deterministic
//! [`RuleBasedClassifier`]. A classifier that fails on a request is replaced
//! by the rule-based one for that request.

#![deny(unsafe_code)]
#![warn(rust_2018_idioms)]

mod alerts;
mod classifier;
mod error;
mod exceedance;
mod features;
mod remote;
mod scorer;

pub use alerts::{alert_lines, build_alerts, sort_alerts, Alert, AlertFilter};
pub use classifier::{Classification, RiskClassifier, RuleBasedClassifier, RULE_BASED_MODEL_NAME};
pub use error::{ClassifierError, ClassifierResult};
pub use exceedance::{
    contamination_issues, contamination_report, exceedance, times_over, times_over_limit,
    ContaminationAlert, ContaminationIssue,
};
pub use features::RiskFeatures;
pub use remote::{RemoteRiskClassifier, DEFAULT_REMOTE_CLASSIFIER_NAME};
pub use scorer::{base_score, blend_score, RiskScorer};
