//! Scoring and comparison module

pub mod comparator;
pub mod scorer;

pub use comparator::{AnalysisResult, Outcome};
pub use scorer::{CandidateRecord, ScoreBreakdown, Scorer, Status};
