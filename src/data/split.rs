use crate::data::Example;
use crate::error::{ConfigError, SplitError};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// How many examples go to the held-out set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TestSize {
    /// Absolute count, capped so that at least one example stays in training.
    Count(usize),
    /// Fraction in `(0, 1)`, rounded, at least one example.
    Fraction(f64),
}

impl TestSize {
    pub fn test_len(&self, total: usize) -> Result<usize, SplitError> {
        if total == 0 {
            return Err(SplitError::Empty);
        }
        match *self {
            TestSize::Count(n) => Ok(n.min(total - 1)),
            TestSize::Fraction(f) => {
                if !(f > 0.0 && f < 1.0) {
                    return Err(SplitError::InvalidFraction(f));
                }
                let k = (total as f64 * f).round() as usize;
                Ok(k.max(1).min(total))
            }
        }
    }
}

impl Default for TestSize {
    fn default() -> Self {
        TestSize::Count(4)
    }
}

impl Display for TestSize {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            TestSize::Count(n) => write!(f, "{n}"),
            TestSize::Fraction(x) => write!(f, "{x}"),
        }
    }
}

/// `"4"` parses as a count, `"0.3"` as a fraction.
impl FromStr for TestSize {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let invalid = || ConfigError::InvalidTestSize(s.to_string());
        if s.contains('.') {
            let f: f64 = s.parse().map_err(|_| invalid())?;
            if f > 0.0 && f < 1.0 {
                Ok(TestSize::Fraction(f))
            } else {
                Err(invalid())
            }
        } else {
            s.parse().map(TestSize::Count).map_err(|_| invalid())
        }
    }
}

/// Seeded shuffle split into disjoint `(train, test)` sets.
///
/// The first `k` shuffled indices form the test set; both halves keep the
/// original example order. Same seed and input always give the same split.
pub fn train_test_split(
    examples: &[Example],
    test_size: TestSize,
    seed: u64,
) -> Result<(Vec<Example>, Vec<Example>), SplitError> {
    let k_test = test_size.test_len(examples.len())?;

    let mut rng = StdRng::seed_from_u64(seed);
    let mut indices: Vec<usize> = (0..examples.len()).collect();
    indices.shuffle(&mut rng);

    let test_idx: HashSet<usize> = indices.into_iter().take(k_test).collect();
    let (test, train): (Vec<_>, Vec<_>) = examples
        .iter()
        .enumerate()
        .partition(|(i, _)| test_idx.contains(i));

    Ok((
        train.into_iter().map(|(_, e)| e.clone()).collect(),
        test.into_iter().map(|(_, e)| e.clone()).collect(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::supplier_dataset;

    #[test]
    fn count_sizes_and_cap() {
        assert_eq!(TestSize::Count(4).test_len(14), Ok(4));
        assert_eq!(TestSize::Count(20).test_len(14), Ok(13));
        assert_eq!(TestSize::Count(0).test_len(14), Ok(0));
        assert_eq!(TestSize::Count(3).test_len(0), Err(SplitError::Empty));
    }

    #[test]
    fn fraction_sizes() {
        assert_eq!(TestSize::Fraction(0.3).test_len(14), Ok(4));
        assert_eq!(TestSize::Fraction(0.01).test_len(14), Ok(1));
        assert_eq!(
            TestSize::Fraction(1.5).test_len(14),
            Err(SplitError::InvalidFraction(1.5))
        );
        assert_eq!(
            TestSize::Fraction(0.0).test_len(14),
            Err(SplitError::InvalidFraction(0.0))
        );
    }

    #[test]
    fn parse_count_and_fraction() {
        assert_eq!("4".parse::<TestSize>().unwrap(), TestSize::Count(4));
        assert_eq!(" 0.25 ".parse::<TestSize>().unwrap(), TestSize::Fraction(0.25));
        assert!(matches!(
            "1.5".parse::<TestSize>(),
            Err(ConfigError::InvalidTestSize(_))
        ));
        assert!(matches!(
            "four".parse::<TestSize>(),
            Err(ConfigError::InvalidTestSize(_))
        ));
    }

    #[test]
    fn serde_shape() {
        let v = serde_json::to_value(TestSize::Count(4)).unwrap();
        assert_eq!(v, serde_json::json!({ "count": 4 }));
        let f: TestSize = serde_json::from_str(r#"{"fraction":0.3}"#).unwrap();
        assert_eq!(f, TestSize::Fraction(0.3));
    }

    #[test]
    fn split_is_disjoint_and_complete() {
        let ds = supplier_dataset();
        let (train, test) = train_test_split(ds.examples(), TestSize::Count(4), 42).unwrap();
        assert_eq!(train.len(), 10);
        assert_eq!(test.len(), 4);

        // Rows of the supplier table are pairwise distinct, so equality is identity.
        for t in &test {
            assert!(!train.contains(t));
        }
        for e in ds.examples() {
            assert!(train.contains(e) || test.contains(e));
        }
    }

    #[test]
    fn split_keeps_original_order() {
        let ds = supplier_dataset();
        let (train, _) = train_test_split(ds.examples(), TestSize::Count(4), 7).unwrap();
        let positions: Vec<usize> = train
            .iter()
            .map(|e| ds.examples().iter().position(|x| x == e).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn same_seed_same_split() {
        let ds = supplier_dataset();
        let a = train_test_split(ds.examples(), TestSize::Count(4), 42).unwrap();
        let b = train_test_split(ds.examples(), TestSize::Count(4), 42).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn empty_input_is_an_error() {
        assert_eq!(
            train_test_split(&[], TestSize::Count(1), 1),
            Err(SplitError::Empty)
        );
    }
}
