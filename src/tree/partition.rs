use crate::data::Example;
use crate::tree::LabelCounts;
use std::collections::HashMap;

/// Examples sharing one value of the partitioning attribute.
#[derive(Debug, Clone, PartialEq)]
pub struct Bucket<'a> {
    pub value: &'a str,
    pub examples: Vec<&'a Example>,
}

impl<'a> Bucket<'a> {
    pub fn label_counts(&self) -> LabelCounts<'a> {
        LabelCounts::from_examples(self.examples.iter().copied())
    }
}

/// Groups `examples` by their value for `attribute`.
///
/// Buckets appear in first-encounter order and partition the input exactly.
/// Only values observed in `examples` get a bucket, so no bucket is empty.
pub fn partition<'a, I>(examples: I, attribute: &str) -> Vec<Bucket<'a>>
where
    I: IntoIterator<Item = &'a Example>,
{
    let mut buckets: Vec<Bucket<'a>> = Vec::new();
    let mut index: HashMap<&'a str, usize> = HashMap::new();

    for example in examples {
        let Some(value) = example.value(attribute) else {
            continue;
        };
        match index.get(value) {
            Some(&i) => buckets[i].examples.push(example),
            None => {
                index.insert(value, buckets.len());
                buckets.push(Bucket {
                    value,
                    examples: vec![example],
                });
            }
        }
    }
    buckets
}
