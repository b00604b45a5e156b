use crate::tree::LabelCounts;
use crate::tree::split_criteria::split_criterion::{SplitCriterion, weighted_impurity};

/// Information gain, the ID3 criterion.
pub struct InfoGainSplitCriterion {}

impl InfoGainSplitCriterion {
    pub const fn new() -> Self {
        Self {}
    }

    /// `H(S) = -Σ p_c log2 p_c`, zero for an empty distribution.
    pub fn compute_entropy(distribution: &LabelCounts) -> f64 {
        distribution
            .proportions()
            .filter(|p| *p > 0.0)
            .map(|p| -p * p.log2())
            .sum()
    }
}

impl Default for InfoGainSplitCriterion {
    fn default() -> Self {
        Self::new()
    }
}

impl SplitCriterion for InfoGainSplitCriterion {
    fn get_range_of_merit(&self, pre_split: &LabelCounts) -> f64 {
        (pre_split.len().max(2) as f64).log2()
    }

    fn get_merit_of_split(&self, pre_split: &LabelCounts, post_split: &[LabelCounts]) -> f64 {
        Self::compute_entropy(pre_split)
            - weighted_impurity(pre_split, post_split, Self::compute_entropy)
    }
}
