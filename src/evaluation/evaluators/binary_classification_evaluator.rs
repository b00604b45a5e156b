use crate::evaluation::{Measurement, PerformanceEvaluator};

/// Confusion counts against one positive class.
///
/// Any label other than `positive_label` counts as negative, so datasets with
/// more than two classes are scored one-vs-rest. Accuracy still compares the
/// exact labels.
///
/// Every ratio with a zero denominator is reported as `0.0`, never NaN.
#[derive(Debug, Clone)]
pub struct BinaryClassificationEvaluator {
    positive_label: String,
    correct: usize,
    true_positives: usize,
    false_positives: usize,
    false_negatives: usize,
    true_negatives: usize,
}

impl BinaryClassificationEvaluator {
    pub fn new<L: Into<String>>(positive_label: L) -> Self {
        Self {
            positive_label: positive_label.into(),
            correct: 0,
            true_positives: 0,
            false_positives: 0,
            false_negatives: 0,
            true_negatives: 0,
        }
    }

    pub fn positive_label(&self) -> &str {
        &self.positive_label
    }

    pub fn total(&self) -> usize {
        self.true_positives + self.false_positives + self.false_negatives + self.true_negatives
    }

    pub fn true_positives(&self) -> usize {
        self.true_positives
    }

    pub fn false_positives(&self) -> usize {
        self.false_positives
    }

    pub fn false_negatives(&self) -> usize {
        self.false_negatives
    }

    pub fn true_negatives(&self) -> usize {
        self.true_negatives
    }

    #[inline]
    fn ratio(num: usize, den: usize) -> f64 {
        if den == 0 { 0.0 } else { num as f64 / den as f64 }
    }

    pub fn accuracy(&self) -> f64 {
        Self::ratio(self.correct, self.total())
    }

    pub fn precision(&self) -> f64 {
        Self::ratio(self.true_positives, self.true_positives + self.false_positives)
    }

    pub fn recall(&self) -> f64 {
        Self::ratio(self.true_positives, self.true_positives + self.false_negatives)
    }

    /// Harmonic mean of precision and recall; `0.0` without true positives.
    pub fn f1(&self) -> f64 {
        if self.true_positives == 0 {
            return 0.0;
        }
        let p = self.precision();
        let r = self.recall();
        2.0 * p * r / (p + r)
    }
}

impl PerformanceEvaluator for BinaryClassificationEvaluator {
    fn reset(&mut self) {
        *self = Self::new(std::mem::take(&mut self.positive_label));
    }

    fn add_result(&mut self, actual: &str, predicted: &str) {
        if actual == predicted {
            self.correct += 1;
        }
        let actual_pos = actual == self.positive_label;
        let predicted_pos = predicted == self.positive_label;
        match (actual_pos, predicted_pos) {
            (true, true) => self.true_positives += 1,
            (false, true) => self.false_positives += 1,
            (true, false) => self.false_negatives += 1,
            (false, false) => self.true_negatives += 1,
        }
    }

    fn performance(&self) -> Vec<Measurement> {
        vec![
            Measurement::new("accuracy", self.accuracy()),
            Measurement::new("precision", self.precision()),
            Measurement::new("recall", self.recall()),
            Measurement::new("f1", self.f1()),
            Measurement::new("true_positives", self.true_positives as f64),
            Measurement::new("false_positives", self.false_positives as f64),
            Measurement::new("false_negatives", self.false_negatives as f64),
            Measurement::new("true_negatives", self.true_negatives as f64),
        ]
    }
}
