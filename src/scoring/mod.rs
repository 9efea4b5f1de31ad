//! Risk scoring: classifier probability, heuristic overlay and verdict mapping.

pub mod adjustment;
pub mod error;
pub mod scorer;
pub mod verdict;

pub use error::ScoreError;
pub use scorer::{RiskScorer, ScoreBreakdown};
pub use verdict::{RiskLabel, RiskVerdict, SeverityStyle};
