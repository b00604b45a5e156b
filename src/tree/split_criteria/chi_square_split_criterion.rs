use crate::tree::LabelCounts;
use crate::tree::split_criteria::split_criterion::SplitCriterion;

/// Pearson's chi-square statistic of the value × class contingency table,
/// used as a raw score for CHAID-style selection.
///
/// No degrees-of-freedom correction and no significance test: a larger
/// statistic simply means a stronger attribute/class association.
pub struct ChiSquareSplitCriterion {}

impl ChiSquareSplitCriterion {
    pub const fn new() -> Self {
        Self {}
    }
}

impl Default for ChiSquareSplitCriterion {
    fn default() -> Self {
        Self::new()
    }
}

impl SplitCriterion for ChiSquareSplitCriterion {
    /// `N · (k - 1)` for `k` classes; reached by a split that isolates classes.
    fn get_range_of_merit(&self, pre_split: &LabelCounts) -> f64 {
        (pre_split.total() * pre_split.len().saturating_sub(1)) as f64
    }

    fn get_merit_of_split(&self, pre_split: &LabelCounts, post_split: &[LabelCounts]) -> f64 {
        let grand_total = pre_split.total() as f64;
        if post_split.is_empty() || grand_total == 0.0 {
            return 0.0;
        }

        let mut chi2 = 0.0;
        for row in post_split {
            let row_total = row.total() as f64;
            for (label, col_total) in pre_split.iter() {
                let expected = row_total * col_total as f64 / grand_total;
                if expected > 0.0 {
                    let observed = row.count_of(label) as f64;
                    chi2 += (observed - expected).powi(2) / expected;
                }
            }
        }
        chi2
    }
}
