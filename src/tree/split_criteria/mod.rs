mod chi_square_split_criterion;
mod gain_ratio_split_criterion;
mod gini_split_criterion;
mod info_gain_split_criterion;
mod split_criterion;

pub use chi_square_split_criterion::ChiSquareSplitCriterion;
pub use gain_ratio_split_criterion::{GainRatioSplitCriterion, MIN_SPLIT_INFO};
pub use gini_split_criterion::GiniSplitCriterion;
pub use info_gain_split_criterion::InfoGainSplitCriterion;
pub use split_criterion::SplitCriterion;
