use crate::tree::LabelCounts;
use crate::tree::split_criteria::split_criterion::{SplitCriterion, weighted_impurity};

/// Reduction in Gini impurity, the CART criterion.
pub struct GiniSplitCriterion {}

impl GiniSplitCriterion {
    pub const fn new() -> Self {
        Self {}
    }

    /// `G(S) = 1 - Σ p_c²`, zero for an empty distribution.
    pub fn compute_gini(distribution: &LabelCounts) -> f64 {
        if distribution.total() == 0 {
            return 0.0;
        }
        let mut gini = 1.0;
        for rel_freq in distribution.proportions() {
            gini -= rel_freq * rel_freq;
        }
        gini
    }
}

impl Default for GiniSplitCriterion {
    fn default() -> Self {
        Self::new()
    }
}

impl SplitCriterion for GiniSplitCriterion {
    fn get_range_of_merit(&self, _pre_split: &LabelCounts) -> f64 {
        1.0
    }

    fn get_merit_of_split(&self, pre_split: &LabelCounts, post_split: &[LabelCounts]) -> f64 {
        Self::compute_gini(pre_split) - weighted_impurity(pre_split, post_split, Self::compute_gini)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dist(labels: &[&'static str]) -> LabelCounts<'static> {
        let mut c = LabelCounts::new();
        for &l in labels {
            c.add(l);
        }
        c
    }

    #[test]
    fn gini_of_pure_and_empty_is_zero() {
        assert_eq!(GiniSplitCriterion::compute_gini(&dist(&[])), 0.0);
        assert_eq!(GiniSplitCriterion::compute_gini(&dist(&["x", "x"])), 0.0);
    }

    #[test]
    fn gini_bound_reached_only_at_uniform() {
        for k in 2..=5usize {
            let labels: Vec<&'static str> = ["a", "b", "c", "d", "e"][..k].to_vec();
            let bound = 1.0 - 1.0 / k as f64;

            let uniform: Vec<&'static str> = labels.iter().chain(labels.iter()).copied().collect();
            let g = GiniSplitCriterion::compute_gini(&dist(&uniform));
            assert!((g - bound).abs() < 1e-12, "k={k}: {g} vs {bound}");

            let mut skewed = uniform.clone();
            skewed.push("a");
            let g = GiniSplitCriterion::compute_gini(&dist(&skewed));
            assert!(g >= 0.0 && g < bound - 1e-12, "k={k}: {g} should be < {bound}");
        }
    }

    #[test]
    fn known_value() {
        let g = GiniSplitCriterion::compute_gini(&dist(&["a", "a", "a", "b"]));
        assert!((g - 0.375).abs() < 1e-12);
    }

    #[test]
    fn gain_of_perfect_split_equals_parent_impurity() {
        let pre = dist(&["a", "b", "a", "b"]);
        let post = vec![dist(&["a", "a"]), dist(&["b", "b"])];
        let gg = GiniSplitCriterion::new().get_merit_of_split(&pre, &post);
        assert!((gg - 0.5).abs() < 1e-12);
    }
}
