//! Scoring policies
//!
//! This module provides:
//! - Similarity trait: the overridable weight functions a ranking engine
//!   calls per term, document and query
//! - StandardSimilarity: tf-idf with length normalization, for free text
//! - FlatSimilarity: frequency, rarity and length all ignored
//! - NoLengthSimilarity: tf-idf without length normalization
//! - ScoringPolicy: serializable selector for the three
//!
//! Every function is pure. Identical inputs always give identical weights.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::norms::FieldInvertState;

// ============================================================================
// Similarity Trait
// ============================================================================

/// Overridable weight functions consumed by a ranking engine
///
/// The provided methods implement the standard tf-idf policy. Policies
/// override only the functions they change.
///
/// # Thread Safety
///
/// Policies must be Send + Sync; one instance serves every query.
pub trait Similarity: Send + Sync {
    /// Weight of a term occurring `freq` times in a document: `sqrt(freq)`
    fn tf(&self, freq: f32) -> f32 {
        freq.max(0.0).sqrt()
    }

    /// Rarity weight: `ln(total_docs / (doc_freq + 1)) + 1`
    ///
    /// An empty corpus gives 1.0.
    fn idf(&self, doc_freq: u64, total_docs: u64) -> f32 {
        if total_docs == 0 {
            return 1.0;
        }
        ((total_docs as f64 / (doc_freq as f64 + 1.0)).ln() + 1.0) as f32
    }

    /// Field length weight: `1 / sqrt(num_terms)`; an empty field gives 1.0
    fn length_norm(&self, _field: &str, num_terms: u32) -> f32 {
        if num_terms == 0 {
            return 1.0;
        }
        (1.0 / (num_terms as f64).sqrt()) as f32
    }

    /// Query weight normalizer: `1 / sqrt(sum_of_squared_weights)`
    ///
    /// A non-positive or non-finite sum gives 1.0.
    fn query_norm(&self, sum_of_squared_weights: f32) -> f32 {
        if !sum_of_squared_weights.is_finite() || sum_of_squared_weights <= 0.0 {
            return 1.0;
        }
        1.0 / sum_of_squared_weights.sqrt()
    }

    /// Fraction of query clauses matched: `overlap / max_overlap`
    fn coord(&self, overlap: u32, max_overlap: u32) -> f32 {
        if max_overlap == 0 {
            return 0.0;
        }
        overlap as f32 / max_overlap as f32
    }

    /// Sloppy phrase decay: `1 / (distance + 1)`
    fn sloppy_freq(&self, distance: u32) -> f32 {
        1.0 / (distance as f32 + 1.0)
    }

    /// Whether tokens at increment 0 are left out of length accounting
    fn discount_overlaps(&self) -> bool {
        false
    }

    /// Index-time norm for one field value: `boost * length_norm(n)`
    fn compute_norm(&self, field: &str, state: &FieldInvertState) -> f32 {
        let num_terms = if self.discount_overlaps() {
            state.length.saturating_sub(state.num_overlap)
        } else {
            state.length
        };
        state.boost * self.length_norm(field, num_terms)
    }

    /// Name for debugging and logging
    fn name(&self) -> &str;
}

// ============================================================================
// StandardSimilarity
// ============================================================================

/// Free-text policy: every provided function unchanged
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StandardSimilarity {
    discount_overlaps: bool,
}

impl StandardSimilarity {
    /// Create a standard policy
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: exclude overlap tokens from length accounting
    pub fn with_discount_overlaps(mut self, discount: bool) -> Self {
        self.discount_overlaps = discount;
        self
    }
}

impl Similarity for StandardSimilarity {
    fn discount_overlaps(&self) -> bool {
        self.discount_overlaps
    }

    fn name(&self) -> &str {
        "standard"
    }
}

// ============================================================================
// FlatSimilarity
// ============================================================================

/// Categorical-match policy
///
/// Term frequency, rarity, field length and clause coverage all weigh 1.0,
/// so a match scores the same wherever it occurs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlatSimilarity {
    discount_overlaps: bool,
}

impl FlatSimilarity {
    /// Create a flat policy
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: exclude overlap tokens from length accounting
    pub fn with_discount_overlaps(mut self, discount: bool) -> Self {
        self.discount_overlaps = discount;
        self
    }
}

impl Similarity for FlatSimilarity {
    fn tf(&self, _freq: f32) -> f32 {
        1.0
    }

    fn idf(&self, _doc_freq: u64, _total_docs: u64) -> f32 {
        1.0
    }

    fn length_norm(&self, _field: &str, _num_terms: u32) -> f32 {
        1.0
    }

    fn coord(&self, _overlap: u32, _max_overlap: u32) -> f32 {
        1.0
    }

    fn discount_overlaps(&self) -> bool {
        self.discount_overlaps
    }

    fn name(&self) -> &str {
        "flat"
    }
}

// ============================================================================
// NoLengthSimilarity
// ============================================================================

/// tf-idf policy that never penalizes short or long fields
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoLengthSimilarity {
    discount_overlaps: bool,
}

impl NoLengthSimilarity {
    /// Create a no-length policy
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: exclude overlap tokens from length accounting
    pub fn with_discount_overlaps(mut self, discount: bool) -> Self {
        self.discount_overlaps = discount;
        self
    }
}

impl Similarity for NoLengthSimilarity {
    fn length_norm(&self, _field: &str, _num_terms: u32) -> f32 {
        1.0
    }

    fn discount_overlaps(&self) -> bool {
        self.discount_overlaps
    }

    fn name(&self) -> &str {
        "no-length"
    }
}

// ============================================================================
// ScoringPolicy
// ============================================================================

/// Selector for a built-in policy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringPolicy {
    /// [`StandardSimilarity`]
    #[default]
    Standard,
    /// [`FlatSimilarity`]
    Flat,
    /// [`NoLengthSimilarity`]
    NoLength,
}

impl ScoringPolicy {
    /// Instantiate the policy
    pub fn similarity(self) -> Arc<dyn Similarity> {
        match self {
            ScoringPolicy::Standard => Arc::new(StandardSimilarity::new()),
            ScoringPolicy::Flat => Arc::new(FlatSimilarity::new()),
            ScoringPolicy::NoLength => Arc::new(NoLengthSimilarity::new()),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
