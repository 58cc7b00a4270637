//! Transparency index types.

use serde::{Deserialize, Serialize};

/// A single verified sub-score of the transparency index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransparencyScore {
    /// Score, 0-100.
    pub score: u8,
    /// Whether the score is backed by third-party verification.
    pub verified: bool,
}

impl TransparencyScore {
    pub fn new(score: u8, verified: bool) -> Self {
        Self { score, verified }
    }
}

/// Derived 0-100 scoring of how well a product's sustainability claims
/// are documented.
///
/// `overall` is an independently stored value from the data source. It is
/// not necessarily an average of the sub-scores, so there is no recompute
/// helper here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransparencyIndex {
    /// Overall score, 0-100.
    pub overall: u8,
    /// Carbon documentation sub-score.
    pub carbon: TransparencyScore,
    /// Water documentation sub-score.
    pub water: TransparencyScore,
    /// Ethics documentation sub-score.
    pub ethics: TransparencyScore,
    /// Region/origin documentation sub-score.
    pub region: TransparencyScore,
}
