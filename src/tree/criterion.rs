use crate::data::Example;
use crate::error::ConfigError;
use crate::tree::LabelCounts;
use crate::tree::partition::{Bucket, partition};
use crate::tree::split_criteria::{
    ChiSquareSplitCriterion, GainRatioSplitCriterion, GiniSplitCriterion, InfoGainSplitCriterion,
    SplitCriterion,
};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumMessage, EnumString, IntoStaticStr};

static INFO_GAIN: InfoGainSplitCriterion = InfoGainSplitCriterion::new();
static GAIN_RATIO: GainRatioSplitCriterion = GainRatioSplitCriterion::new();
static GINI: GiniSplitCriterion = GiniSplitCriterion::new();
static CHI_SQUARE: ChiSquareSplitCriterion = ChiSquareSplitCriterion::new();

/// Split-selection statistic, one per induction algorithm.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    EnumString,
    Display,
    IntoStaticStr,
    EnumMessage,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
#[serde(try_from = "String", into = "String")]
pub enum Criterion {
    #[strum(
        to_string = "information-gain",
        serialize = "id3",
        message = "ID3",
        detailed_message = "Information gain: reduction in class entropy."
    )]
    InformationGain,

    #[strum(
        to_string = "gain-ratio",
        serialize = "c45",
        serialize = "c4.5",
        message = "C4.5",
        detailed_message = "Gain ratio: information gain normalized by split information."
    )]
    GainRatio,

    #[strum(
        to_string = "gini-gain",
        serialize = "cart",
        message = "CART",
        detailed_message = "Gini gain: reduction in Gini impurity."
    )]
    GiniGain,

    #[strum(
        to_string = "chi-square",
        serialize = "chaid",
        message = "CHAID",
        detailed_message = "Chi-square: Pearson statistic of the value x class table."
    )]
    ChiSquare,
}

impl Criterion {
    /// Parses a kebab-case name or an algorithm code, ignoring ASCII case.
    pub fn parse(name: &str) -> Result<Self, ConfigError> {
        name.trim()
            .parse()
            .map_err(|_| ConfigError::UnknownCriterion(name.to_string()))
    }

    /// Name of the classical algorithm this criterion drives.
    pub fn algorithm_name(&self) -> &'static str {
        match self {
            Criterion::InformationGain => "ID3",
            Criterion::GainRatio => "C4.5",
            Criterion::GiniGain => "CART",
            Criterion::ChiSquare => "CHAID",
        }
    }

    pub fn split_criterion(&self) -> &'static dyn SplitCriterion {
        match self {
            Criterion::InformationGain => &INFO_GAIN,
            Criterion::GainRatio => &GAIN_RATIO,
            Criterion::GiniGain => &GINI,
            Criterion::ChiSquare => &CHI_SQUARE,
        }
    }

    /// Merit of splitting `examples` on `attribute`, never negative.
    pub fn score(&self, examples: &[&Example], attribute: &str) -> f64 {
        let pre_split = LabelCounts::from_examples(examples.iter().copied());
        let post_split: Vec<LabelCounts> = partition(examples.iter().copied(), attribute)
            .iter()
            .map(Bucket::label_counts)
            .collect();
        self.split_criterion()
            .get_merit_of_split(&pre_split, &post_split)
            .max(0.0)
    }

    /// Upper bound of [`score`](Criterion::score) for `examples`.
    pub fn range_of_merit(&self, examples: &[&Example]) -> f64 {
        let pre_split = LabelCounts::from_examples(examples.iter().copied());
        self.split_criterion().get_range_of_merit(&pre_split)
    }
}

impl TryFrom<String> for Criterion {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Criterion::parse(&value)
    }
}

impl From<Criterion> for String {
    fn from(value: Criterion) -> Self {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::supplier_dataset;
    use strum::{EnumMessage, IntoEnumIterator};

    #[test]
    fn parses_names_and_codes() {
        assert_eq!(Criterion::parse("information-gain").unwrap(), Criterion::InformationGain);
        assert_eq!(Criterion::parse("ID3").unwrap(), Criterion::InformationGain);
        assert_eq!(Criterion::parse("c4.5").unwrap(), Criterion::GainRatio);
        assert_eq!(Criterion::parse("C45").unwrap(), Criterion::GainRatio);
        assert_eq!(Criterion::parse("Gini-Gain").unwrap(), Criterion::GiniGain);
        assert_eq!(Criterion::parse("cart").unwrap(), Criterion::GiniGain);
        assert_eq!(Criterion::parse(" chaid ").unwrap(), Criterion::ChiSquare);
    }

    #[test]
    fn unknown_name_is_a_config_error() {
        match Criterion::parse("random-forest") {
            Err(ConfigError::UnknownCriterion(name)) => assert_eq!(name, "random-forest"),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn display_round_trips_through_parse() {
        for c in Criterion::iter() {
            assert_eq!(Criterion::parse(&c.to_string()).unwrap(), c);
        }
        assert_eq!(Criterion::ChiSquare.to_string(), "chi-square");
    }

    #[test]
    fn iteration_order_matches_algorithm_order() {
        let names: Vec<&str> = Criterion::iter().map(|c| c.algorithm_name()).collect();
        assert_eq!(names, vec!["ID3", "C4.5", "CART", "CHAID"]);
    }

    #[test]
    fn messages_are_available() {
        assert_eq!(Criterion::GiniGain.get_message(), Some("CART"));
        assert!(Criterion::ChiSquare.get_detailed_message().is_some());
    }

    #[test]
    fn serde_accepts_codes_and_writes_names() {
        let parsed: Vec<Criterion> = serde_json::from_str(r#"["id3", "gain-ratio"]"#).unwrap();
        assert_eq!(parsed, vec![Criterion::InformationGain, Criterion::GainRatio]);
        let json = serde_json::to_string(&Criterion::GiniGain).unwrap();
        assert_eq!(json, r#""gini-gain""#);
        assert!(serde_json::from_str::<Criterion>(r#""unknown""#).is_err());
    }

    #[test]
    fn scores_are_non_negative_and_bounded() {
        let ds = supplier_dataset();
        let examples: Vec<&Example> = ds.examples().iter().collect();
        for c in Criterion::iter() {
            let bound = c.range_of_merit(&examples);
            for a in ds.attribute_names() {
                let s = c.score(&examples, a);
                assert!(s >= 0.0, "{c} on {a}: {s}");
                assert!(s <= bound + 1e-9, "{c} on {a}: {s} > {bound}");
            }
        }
    }

    #[test]
    fn score_of_single_class_set_is_zero() {
        let ex = vec![
            Example::from_pairs([("a", "x")], "Yes"),
            Example::from_pairs([("a", "y")], "Yes"),
        ];
        let refs: Vec<&Example> = ex.iter().collect();
        for c in Criterion::iter() {
            assert!(c.score(&refs, "a").abs() < 1e-12, "{c}");
        }
    }
}
