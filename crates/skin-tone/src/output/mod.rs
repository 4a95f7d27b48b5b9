//! Output types for the analysis pipeline.
//!
//! [`Analysis`] is the immutable result of one analysis call: the chosen
//! skin color in sRGB and L*a*b*, the three attribute labels, the season,
//! and an overall confidence.

mod analysis;

pub use analysis::Analysis;
