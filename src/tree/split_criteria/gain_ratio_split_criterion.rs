use crate::tree::LabelCounts;
use crate::tree::split_criteria::InfoGainSplitCriterion;
use crate::tree::split_criteria::split_criterion::SplitCriterion;

/// Below this split information the gain ratio is reported as zero.
pub const MIN_SPLIT_INFO: f64 = 1e-12;

/// Information gain normalized by split information, the C4.5 criterion.
pub struct GainRatioSplitCriterion {
    info_gain: InfoGainSplitCriterion,
}

impl GainRatioSplitCriterion {
    pub const fn new() -> Self {
        Self {
            info_gain: InfoGainSplitCriterion::new(),
        }
    }

    /// `SI = -Σ_v |S_v|/|S| log2(|S_v|/|S|)`.
    pub fn compute_split_info(pre_split: &LabelCounts, post_split: &[LabelCounts]) -> f64 {
        let n = pre_split.total() as f64;
        if n == 0.0 {
            return 0.0;
        }
        post_split
            .iter()
            .map(|bucket| bucket.total() as f64 / n)
            .filter(|p| *p > 0.0)
            .map(|p| -p * p.log2())
            .sum()
    }
}

impl Default for GainRatioSplitCriterion {
    fn default() -> Self {
        Self::new()
    }
}

impl SplitCriterion for GainRatioSplitCriterion {
    fn get_range_of_merit(&self, _pre_split: &LabelCounts) -> f64 {
        1.0
    }

    fn get_merit_of_split(&self, pre_split: &LabelCounts, post_split: &[LabelCounts]) -> f64 {
        let split_info = Self::compute_split_info(pre_split, post_split);
        if split_info <= MIN_SPLIT_INFO {
            return 0.0;
        }
        self.info_gain.get_merit_of_split(pre_split, post_split) / split_info
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
    fn single_valued_attribute_scores_exactly_zero() {
        let pre = dist(&["a", "b", "a"]);
        let post = vec![dist(&["a", "b", "a"])];
        assert_eq!(GainRatioSplitCriterion::compute_split_info(&pre, &post), 0.0);
        assert_eq!(GainRatioSplitCriterion::new().get_merit_of_split(&pre, &post), 0.0);
    }

    #[test]
    fn empty_node_scores_zero() {
        let pre = dist(&[]);
        assert_eq!(GainRatioSplitCriterion::new().get_merit_of_split(&pre, &[]), 0.0);
    }

    #[test]
    fn perfect_binary_split_has_ratio_one() {
        let pre = dist(&["a", "a", "b", "b"]);
        let post = vec![dist(&["a", "a"]), dist(&["b", "b"])];
        assert!((GainRatioSplitCriterion::compute_split_info(&pre, &post) - 1.0).abs() < 1e-12);
        let gr = GainRatioSplitCriterion::new().get_merit_of_split(&pre, &post);
        assert!((gr - 1.0).abs() < 1e-12);
    }

    #[test]
    fn penalizes_many_valued_splits() {
        let pre = dist(&["a", "a", "b", "b"]);
        let two_way = vec![dist(&["a", "a"]), dist(&["b", "b"])];
        let four_way = vec![dist(&["a"]), dist(&["a"]), dist(&["b"]), dist(&["b"])];

        let c = GainRatioSplitCriterion::new();
        let two = c.get_merit_of_split(&pre, &two_way);
        let four = c.get_merit_of_split(&pre, &four_way);
        assert!((four - 0.5).abs() < 1e-12);
        assert!(four < two);
    }
}
