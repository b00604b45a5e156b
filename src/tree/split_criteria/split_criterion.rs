use crate::tree::LabelCounts;

/// Scores a candidate split from class counts alone.
///
/// `pre_split` holds the class counts of the node being split and
/// `post_split` one entry per bucket. Higher merit is always better.
pub trait SplitCriterion: Send + Sync {
    /// Upper bound of [`get_merit_of_split`](SplitCriterion::get_merit_of_split)
    /// for a node with this distribution.
    fn get_range_of_merit(&self, pre_split: &LabelCounts) -> f64;

    fn get_merit_of_split(&self, pre_split: &LabelCounts, post_split: &[LabelCounts]) -> f64;
}

/// `Σ_v |S_v|/|S| · impurity(S_v)` over the buckets of a split.
pub(crate) fn weighted_impurity<F>(pre_split: &LabelCounts, post_split: &[LabelCounts], impurity: F) -> f64
where
    F: Fn(&LabelCounts) -> f64,
{
    let n = pre_split.total() as f64;
    if n == 0.0 {
        return 0.0;
    }
    post_split
        .iter()
        .map(|bucket| bucket.total() as f64 / n * impurity(bucket))
        .sum()
}
