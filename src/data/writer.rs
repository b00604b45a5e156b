use crate::data::Dataset;
use crate::data::loader::DEFAULT_DELIMITER;
use crate::error::DatasetError;
use std::fs;
use std::path::Path;
use tracing::info;

/// Writes `dataset` in the same layout [`read_dataset`](crate::data::read_dataset)
/// expects, creating parent directories on the way.
pub fn write_dataset<P: AsRef<Path>>(path: P, dataset: &Dataset) -> Result<(), DatasetError> {
    let path = path.as_ref();
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }

    let mut w = csv::WriterBuilder::new()
        .delimiter(DEFAULT_DELIMITER)
        .from_path(path)?;

    let mut header: Vec<&str> = dataset.attribute_names().iter().map(String::as_str).collect();
    header.push(dataset.target_name());
    w.write_record(&header)?;

    for example in dataset.examples() {
        let mut row: Vec<&str> = dataset
            .attribute_names()
            .iter()
            .map(|name| example.value(name).unwrap_or_default())
            .collect();
        row.push(example.label());
        w.write_record(&row)?;
    }
    w.flush()?;

    info!(path = %path.display(), rows = dataset.len(), "dataset written");
    Ok(())
}
