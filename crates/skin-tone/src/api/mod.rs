//! High-level API: the analysis pipeline and its error type.

mod analyzer;
mod error;

pub use analyzer::{SkinToneAnalyzer, Stage};
pub use error::AnalysisError;
