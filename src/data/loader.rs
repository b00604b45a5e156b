use crate::data::{AttributeValues, Dataset, Example};
use crate::error::DatasetError;
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;
use tracing::debug;

pub const DEFAULT_DELIMITER: u8 = b';';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadOptions {
    pub delimiter: u8,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
        }
    }
}

/// Reads a `;`-delimited dataset whose last header column is the target.
pub fn read_dataset<P: AsRef<Path>>(path: P) -> Result<Dataset, DatasetError> {
    read_dataset_with(path, ReadOptions::default())
}

pub fn read_dataset_with<P: AsRef<Path>>(
    path: P,
    options: ReadOptions,
) -> Result<Dataset, DatasetError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => DatasetError::NotFound(path.to_path_buf()),
        _ => DatasetError::Io(e),
    })?;
    let dataset = read_dataset_from(file, options)?;
    debug!(
        path = %path.display(),
        examples = dataset.len(),
        attributes = dataset.attribute_names().len(),
        "dataset read"
    );
    Ok(dataset)
}

/// Parses a dataset from any reader. Blank rows are skipped.
pub fn read_dataset_from<R: Read>(reader: R, options: ReadOptions) -> Result<Dataset, DatasetError> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(options.delimiter)
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let columns: Vec<String> = rdr
        .headers()?
        .iter()
        .map(|h| h.trim_start_matches('\u{feff}').to_string())
        .collect();

    let Some((target, attributes)) = columns.split_last() else {
        return Err(DatasetError::InvalidHeader("header row is empty".into()));
    };
    if attributes.is_empty() {
        return Err(DatasetError::InvalidHeader(format!(
            "expected at least one attribute column before the target, got '{}'",
            columns.join(";")
        )));
    }
    if let Some(blank) = columns.iter().position(|c| c.is_empty()) {
        return Err(DatasetError::InvalidHeader(format!(
            "column {} has an empty name",
            blank + 1
        )));
    }
    if let Some((i, dup)) = columns
        .iter()
        .enumerate()
        .find(|&(i, c)| columns[..i].contains(c))
    {
        return Err(DatasetError::InvalidHeader(format!(
            "column {} repeats the name '{dup}'",
            i + 1
        )));
    }

    let mut examples = Vec::new();
    for record in rdr.records() {
        let record = record?;
        if record.iter().all(str::is_empty) {
            continue;
        }
        if record.len() != columns.len() {
            return Err(DatasetError::RaggedRow {
                line: record.position().map_or(0, |p| p.line()),
                expected: columns.len(),
                found: record.len(),
            });
        }

        let values: AttributeValues = attributes
            .iter()
            .cloned()
            .zip(record.iter().map(str::to_string))
            .collect();
        let label = &record[columns.len() - 1];
        examples.push(Example::new(values, label));
    }

    Dataset::new(attributes.to_vec(), target.clone(), examples)
}
