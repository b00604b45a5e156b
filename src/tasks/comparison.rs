use crate::config::ComparisonConfig;
use crate::data::{Dataset, read_dataset, supplier_dataset, train_test_split};
use crate::error::Result;
use crate::evaluation::{EvaluationResult, SummaryTable, evaluate, majority_baseline};
use rayon::prelude::*;
use tracing::{info, warn};

/// Everything one comparison run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonReport {
    pub train_len: usize,
    pub test_len: usize,
    /// Accuracy of predicting the training majority label everywhere.
    pub baseline_accuracy: f64,
    /// Whether the configured positive label occurs among the class labels.
    pub positive_label_known: bool,
    /// One entry per configured criterion, in configured order.
    pub results: Vec<EvaluationResult>,
    pub table: SummaryTable,
}

/// Runs every configured criterion over one shared train/test split.
pub struct ComparisonTask {
    config: ComparisonConfig,
}

impl ComparisonTask {
    pub fn new(config: ComparisonConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ComparisonConfig {
        &self.config
    }

    /// Reads the configured dataset, or the built-in supplier table if none.
    pub fn load_dataset(&self) -> Result<Dataset> {
        let dataset = match &self.config.dataset {
            Some(path) => read_dataset(path)?,
            None => supplier_dataset(),
        };
        info!(
            examples = dataset.len(),
            attributes = dataset.attribute_names().len(),
            target = dataset.target_name(),
            "dataset loaded"
        );
        Ok(dataset)
    }

    pub fn run(&self, dataset: &Dataset) -> Result<ComparisonReport> {
        let (train, test) = train_test_split(dataset.examples(), self.config.test_size, self.config.seed)?;
        info!(train = train.len(), test = test.len(), seed = self.config.seed, "split");
        if test.is_empty() {
            warn!("test set is empty; accuracy and F1 will be reported as 0");
        }

        let attributes = dataset.attribute_names();
        let positive = self.config.positive_label.as_str();
        let labels = dataset.class_labels();
        let positive_label_known = labels.contains(&positive);
        if !positive_label_known {
            warn!(
                positive,
                labels = ?labels,
                "positive label is not a class of this dataset; every F1 will be 0"
            );
        }
        let run_one = |criterion| evaluate(&train, &test, attributes, criterion, positive);

        let results = if self.config.parallel {
            self.config
                .criteria
                .par_iter()
                .map(|&c| run_one(c))
                .collect::<std::result::Result<Vec<_>, _>>()?
        } else {
            self.config
                .criteria
                .iter()
                .map(|&c| run_one(c))
                .collect::<std::result::Result<Vec<_>, _>>()?
        };

        Ok(ComparisonReport {
            train_len: train.len(),
            test_len: test.len(),
            baseline_accuracy: majority_baseline(&train, &test),
            positive_label_known,
            table: SummaryTable::from_results(&results),
            results,
        })
    }

    /// [`load_dataset`](Self::load_dataset) followed by [`run`](Self::run).
    pub fn execute(&self) -> Result<ComparisonReport> {
        let dataset = self.load_dataset()?;
        self.run(&dataset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{TestSize, write_dataset};
    use crate::error::{ConfigError, Error};
    use crate::testing::dummies::fixed_split;
    use crate::tree::Criterion;
    use tempfile::tempdir;

    #[test]
    fn rejects_config_without_criteria() {
        let config = ComparisonConfig {
            criteria: vec![],
            ..ComparisonConfig::default()
        };
        assert!(matches!(
            ComparisonTask::new(config),
            Err(Error::Config(ConfigError::NoCriteria))
        ));
    }

    #[test]
    fn default_run_on_supplier_table() {
        let task = ComparisonTask::new(ComparisonConfig::default()).unwrap();
        let report = task.execute().unwrap();
        assert_eq!(report.train_len, 10);
        assert_eq!(report.test_len, 4);
        assert_eq!(report.results.len(), 4);

        let names: Vec<&str> = report.table.records().iter().map(|r| r.algorithm.as_str()).collect();
        assert_eq!(names, vec!["ID3", "C4.5", "CART", "CHAID"]);
        assert!(report.positive_label_known);
        for r in &report.results {
            assert!((0.0..=1.0).contains(&r.accuracy));
            assert!((0.0..=1.0).contains(&r.f1));
            assert!(r.node_count >= 1);
            assert!(
                r.accuracy >= report.baseline_accuracy,
                "{}: {} < baseline {}",
                r.criterion,
                r.accuracy,
                report.baseline_accuracy
            );
        }
    }

    #[test]
    fn seeded_splits_never_fall_below_the_baseline() {
        let ds = supplier_dataset();
        for seed in [0, 1, 7, 42, 123] {
            let report = ComparisonTask::new(ComparisonConfig {
                seed,
                ..ComparisonConfig::default()
            })
            .unwrap()
            .run(&ds)
            .unwrap();
            assert_eq!((report.train_len, report.test_len), (10, 4));
            for r in &report.results {
                assert!(
                    r.accuracy >= report.baseline_accuracy,
                    "seed {seed}, {}: {} < baseline {}",
                    r.criterion,
                    r.accuracy,
                    report.baseline_accuracy
                );
            }
        }
    }

    #[test]
    fn unknown_positive_label_is_flagged_and_zeroes_f1() {
        let report = ComparisonTask::new(ComparisonConfig {
            positive_label: "Maybe".into(),
            ..ComparisonConfig::default()
        })
        .unwrap()
        .execute()
        .unwrap();
        assert!(!report.positive_label_known);
        for r in &report.results {
            assert_eq!(r.f1, 0.0);
        }
    }

    #[test]
    fn same_seed_gives_identical_tables() {
        let task = ComparisonTask::new(ComparisonConfig::default()).unwrap();
        let ds = supplier_dataset();
        let a = task.run(&ds).unwrap();
        let b = task.run(&ds).unwrap();

        let strip = |r: &ComparisonReport| {
            r.table
                .records()
                .iter()
                .map(|rec| (rec.algorithm.clone(), rec.accuracy, rec.f1, rec.nodes))
                .collect::<Vec<_>>()
        };
        assert_eq!(strip(&a), strip(&b));
        assert_eq!(a.baseline_accuracy, b.baseline_accuracy);
    }

    #[test]
    fn parallel_keeps_configured_order_and_values() {
        let ds = supplier_dataset();
        let order = vec![Criterion::ChiSquare, Criterion::InformationGain, Criterion::GiniGain];
        let serial = ComparisonTask::new(ComparisonConfig {
            criteria: order.clone(),
            ..ComparisonConfig::default()
        })
        .unwrap()
        .run(&ds)
        .unwrap();
        let parallel = ComparisonTask::new(ComparisonConfig {
            criteria: order.clone(),
            parallel: true,
            ..ComparisonConfig::default()
        })
        .unwrap()
        .run(&ds)
        .unwrap();

        let got: Vec<Criterion> = parallel.results.iter().map(|r| r.criterion).collect();
        assert_eq!(got, order);
        for (s, p) in serial.results.iter().zip(&parallel.results) {
            assert_eq!(s.accuracy, p.accuracy);
            assert_eq!(s.f1, p.f1);
            assert_eq!(s.node_count, p.node_count);
        }
    }

    #[test]
    fn every_criterion_beats_or_matches_the_baseline_on_the_fixed_split() {
        let (train, test) = fixed_split();
        let attributes = supplier_dataset().attribute_names().to_vec();
        let baseline = majority_baseline(&train, &test);
        assert_eq!(baseline, 0.5);
        for c in ComparisonConfig::default().criteria {
            let r = evaluate(&train, &test, &attributes, c, "Yes").unwrap();
            assert!(r.accuracy >= baseline, "{c}");
        }
    }

    #[test]
    fn zero_test_size_reports_zero_scores() {
        let ds = supplier_dataset();
        let task = ComparisonTask::new(ComparisonConfig {
            test_size: TestSize::Count(0),
            ..ComparisonConfig::default()
        })
        .unwrap();
        let report = task.run(&ds).unwrap();
        assert_eq!(report.train_len, 14);
        assert_eq!(report.test_len, 0);
        for r in &report.results {
            assert_eq!(r.accuracy, 0.0);
            assert_eq!(r.f1, 0.0);
            assert!(r.node_count > 1);
        }
    }

    #[test]
    fn reads_configured_dataset_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("suppliers.csv");
        write_dataset(&path, &supplier_dataset()).unwrap();

        let task = ComparisonTask::new(ComparisonConfig {
            dataset: Some(path),
            ..ComparisonConfig::default()
        })
        .unwrap();
        assert_eq!(task.load_dataset().unwrap(), supplier_dataset());
    }

    #[test]
    fn missing_dataset_file_is_an_error() {
        let task = ComparisonTask::new(ComparisonConfig {
            dataset: Some("no/such/file.csv".into()),
            ..ComparisonConfig::default()
        })
        .unwrap();
        assert!(matches!(task.execute(), Err(Error::Dataset(_))));
    }
}
