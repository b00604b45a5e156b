use crate::error::SummaryError;
use crate::evaluation::EvaluationResult;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// One rounded row of the comparison table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRecord {
    pub algorithm: String,
    pub accuracy: f64,
    pub f1: f64,
    pub seconds: f64,
    pub nodes: usize,
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

impl From<&EvaluationResult> for SummaryRecord {
    fn from(r: &EvaluationResult) -> Self {
        Self {
            algorithm: r.criterion.algorithm_name().to_string(),
            accuracy: round_to(r.accuracy, 4),
            f1: round_to(r.f1, 4),
            seconds: round_to(r.elapsed.as_secs_f64(), 6),
            nodes: r.node_count,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryFormat {
    Csv,
    Tsv,
    Json,
}

impl SummaryFormat {
    /// Picks the format from the file extension; anything unrecognized is CSV.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        let ext = path
            .as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("tsv") | Some("tab") => SummaryFormat::Tsv,
            Some("json") => SummaryFormat::Json,
            _ => SummaryFormat::Csv,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SummaryTable {
    records: Vec<SummaryRecord>,
}

impl SummaryTable {
    pub fn from_results<'a, I>(results: I) -> Self
    where
        I: IntoIterator<Item = &'a EvaluationResult>,
    {
        Self {
            records: results.into_iter().map(SummaryRecord::from).collect(),
        }
    }

    pub fn push(&mut self, record: SummaryRecord) {
        self.records.push(record)
    }

    pub fn records(&self) -> &[SummaryRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Writes the table to `path`, creating parent directories as needed.
    pub fn export<P: AsRef<Path>>(&self, path: P, fmt: SummaryFormat) -> Result<(), SummaryError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        match fmt {
            SummaryFormat::Csv => self.export_with_delimiter(path, b','),
            SummaryFormat::Tsv => self.export_with_delimiter(path, b'\t'),
            SummaryFormat::Json => self.export_json(path),
        }
    }

    fn export_with_delimiter(&self, path: &Path, delimiter: u8) -> Result<(), SummaryError> {
        let mut w = csv::WriterBuilder::new()
            .delimiter(delimiter)
            .has_headers(true)
            .from_path(path)?;
        if self.records.is_empty() {
            w.write_record(["algorithm", "accuracy", "f1", "seconds", "nodes"])?;
        }
        for r in &self.records {
            w.serialize(r)?;
        }
        w.flush()?;
        Ok(())
    }

    fn export_json(&self, path: &Path) -> Result<(), SummaryError> {
        let mut w = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut w, &self.records)?;
        writeln!(w)?;
        w.flush()?;
        Ok(())
    }
}

impl Display for SummaryTable {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name_width = self
            .records
            .iter()
            .map(|r| r.algorithm.len())
            .chain(std::iter::once("Algorithm".len()))
            .max()
            .unwrap_or(0);

        writeln!(
            f,
            "{:<name_width$}  {:>8}  {:>8}  {:>10}  {:>5}",
            "Algorithm", "Accuracy", "F1", "Time (s)", "Nodes"
        )?;
        for r in &self.records {
            writeln!(
                f,
                "{:<name_width$}  {:>8.4}  {:>8.4}  {:>10.6}  {:>5}",
                r.algorithm, r.accuracy, r.f1, r.seconds, r.nodes
            )?;
        }
        Ok(())
    }
}
