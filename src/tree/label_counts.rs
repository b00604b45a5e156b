use crate::data::Example;

/// Class-frequency table in first-encounter order.
///
/// Only labels that actually occur get an entry, so every stored count is
/// strictly positive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelCounts<'a> {
    entries: Vec<(&'a str, usize)>,
    total: usize,
}

impl<'a> LabelCounts<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_examples<I>(examples: I) -> Self
    where
        I: IntoIterator<Item = &'a Example>,
    {
        let mut counts = Self::new();
        for e in examples {
            counts.add(e.label());
        }
        counts
    }

    pub fn add(&mut self, label: &'a str) {
        match self.entries.iter_mut().find(|(l, _)| *l == label) {
            Some((_, c)) => *c += 1,
            None => self.entries.push((label, 1)),
        }
        self.total += 1;
    }

    #[inline]
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of distinct labels.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_pure(&self) -> bool {
        self.entries.len() == 1
    }

    pub fn count_of(&self, label: &str) -> usize {
        self.entries
            .iter()
            .find(|(l, _)| *l == label)
            .map_or(0, |(_, c)| *c)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'a str, usize)> + '_ {
        self.entries.iter().copied()
    }

    /// Relative frequency of each label, in entry order.
    pub fn proportions(&self) -> impl Iterator<Item = f64> + '_ {
        let n = self.total as f64;
        self.entries.iter().map(move |(_, c)| *c as f64 / n)
    }

    /// Most frequent label; the first one encountered wins ties.
    pub fn majority(&self) -> Option<&'a str> {
        let mut best: Option<(&'a str, usize)> = None;
        for &(label, count) in &self.entries {
            if best.is_none_or(|(_, c)| count > c) {
                best = Some((label, count));
            }
        }
        best.map(|(label, _)| label)
    }
}

/// Majority label of an example set, `None` when it is empty.
pub fn majority_label(examples: &[Example]) -> Option<&str> {
    LabelCounts::from_examples(examples).majority()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(labels: &[&'static str]) -> LabelCounts<'static> {
        let mut c = LabelCounts::new();
        for &l in labels {
            c.add(l);
        }
        c
    }

    #[test]
    fn counts_in_first_encounter_order() {
        let c = counts(&["No", "Yes", "No", "Maybe"]);
        assert_eq!(c.total(), 4);
        assert_eq!(c.len(), 3);
        let order: Vec<_> = c.iter().collect();
        assert_eq!(order, vec![("No", 2), ("Yes", 1), ("Maybe", 1)]);
        assert_eq!(c.count_of("Yes"), 1);
        assert_eq!(c.count_of("absent"), 0);
    }

    #[test]
    fn majority_breaks_ties_by_first_occurrence() {
        assert_eq!(counts(&["Yes", "No", "No", "Yes"]).majority(), Some("Yes"));
        assert_eq!(counts(&["No", "Yes", "Yes", "No"]).majority(), Some("No"));
        assert_eq!(counts(&["No", "Yes", "Yes"]).majority(), Some("Yes"));
        assert_eq!(counts(&[]).majority(), None);
    }

    #[test]
    fn purity() {
        assert!(counts(&["a", "a"]).is_pure());
        assert!(!counts(&["a", "b"]).is_pure());
        assert!(!counts(&[]).is_pure());
    }

    #[test]
    fn proportions_sum_to_one() {
        let c = counts(&["a", "b", "b", "c"]);
        let s: f64 = c.proportions().sum();
        assert!((s - 1.0).abs() < 1e-12);
    }

    #[test]
    fn majority_label_over_examples() {
        let ex = vec![
            Example::from_pairs([("a", "x")], "No"),
            Example::from_pairs([("a", "y")], "Yes"),
            Example::from_pairs([("a", "z")], "Yes"),
        ];
        assert_eq!(majority_label(&ex), Some("Yes"));
        assert_eq!(majority_label(&[]), None);
    }
}
