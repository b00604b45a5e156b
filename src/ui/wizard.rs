use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use strum::{EnumMessage, IntoEnumIterator};

use crate::config::ComparisonConfig;
use crate::data::TestSize;
use crate::tree::Criterion;
use crate::ui::drivers::PromptDriver;

const DIM_ITALIC: &str = "\x1b[2m\x1b[3m";
const RESET: &str = "\x1b[0m";

const DEFAULT_TEST_COUNT: u64 = 4;
const DEFAULT_TEST_FRACTION: f64 = 0.3;

const DATASET_EXTENSIONS: [&str; 3] = ["csv", "txt", "tsv"];
const SUMMARY_EXTENSIONS: [&str; 3] = ["csv", "tsv", "json"];

fn criterion_items() -> Vec<String> {
    Criterion::iter()
        .map(|c| {
            let label = c.get_message().unwrap_or_else(|| c.into());
            match c.get_detailed_message() {
                Some(desc) => format!("{label}  {DIM_ITALIC}{desc}{RESET}"),
                None => label.to_string(),
            }
        })
        .collect()
}

/// Walks the user through every [`ComparisonConfig`] field.
pub fn prompt_config<D: PromptDriver>(driver: &D) -> Result<ComparisonConfig> {
    let defaults = ComparisonConfig::default();

    let dataset = if driver.ask_bool(
        "Use the built-in supplier dataset?",
        "14 examples, 4 attributes, Yes/No decision",
        true,
    )? {
        None
    } else {
        Some(prompt_path_until_ok(
            driver,
            "Dataset path",
            "';'-separated file whose last column is the class",
            "",
            true,
            &DATASET_EXTENSIONS,
        )?)
    };

    let test_size = prompt_test_size(driver)?;

    let seed = driver.ask_u64("Seed", "PRNG seed for the train/test shuffle", defaults.seed, None, None)?;

    let positive_label = driver
        .ask_string(
            "Positive class",
            "Class label treated as positive for F1",
            &defaults.positive_label,
        )?
        .trim()
        .to_string();

    let criteria = prompt_criteria(driver)?;

    let parallel = driver.ask_bool(
        "Run criteria in parallel?",
        "Results keep the order above either way",
        defaults.parallel,
    )?;

    let output = if driver.ask_bool("Save the summary table?", "CSV, TSV or JSON by extension", false)? {
        Some(prompt_path_until_ok(
            driver,
            "Summary path",
            "Where to write the table",
            "summary.csv",
            false,
            &SUMMARY_EXTENSIONS,
        )?)
    } else {
        None
    };

    let config = ComparisonConfig {
        dataset,
        test_size,
        seed,
        positive_label,
        criteria,
        parallel,
        output,
    };
    config.validate().context("wizard produced an invalid configuration")?;
    Ok(config)
}

fn prompt_test_size<D: PromptDriver>(driver: &D) -> Result<TestSize> {
    let options = vec!["Fixed count".to_string(), "Fraction of the dataset".to_string()];
    let choice = driver.ask_select("Test set size", "↑/↓ to navigate, ↵ to select", &options, 0)?;
    Ok(match choice {
        0 => {
            let n = driver.ask_u64(
                "Test examples",
                "Capped so training keeps one example",
                DEFAULT_TEST_COUNT,
                Some(0),
                None,
            )?;
            TestSize::Count(usize::try_from(n).context("test count does not fit in usize")?)
        }
        _ => TestSize::Fraction(driver.ask_f64(
            "Test fraction",
            "Share of examples held out",
            DEFAULT_TEST_FRACTION,
            Some(0.01),
            Some(0.99),
        )?),
    })
}

fn prompt_criteria<D: PromptDriver>(driver: &D) -> Result<Vec<Criterion>> {
    let items = criterion_items();
    let all: Vec<Criterion> = Criterion::iter().collect();
    let defaults: Vec<usize> = (0..all.len()).collect();
    loop {
        let mut picked = driver.ask_multi_select(
            "Algorithms to compare",
            "space to toggle, ↵ to confirm",
            &items,
            &defaults,
        )?;
        picked.sort_unstable();
        picked.dedup();
        let chosen: Vec<Criterion> = picked.into_iter().filter_map(|i| all.get(i).copied()).collect();
        if !chosen.is_empty() {
            return Ok(chosen);
        }
        eprintln!("✗ Select at least one algorithm");
    }
}

fn validate_path_str(input: &str, must_exist: bool, allowed_exts: &[&str]) -> Result<(), String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err("Path cannot be empty".into());
    }
    let p = Path::new(trimmed);

    if must_exist && !p.exists() {
        return Err(format!("Path does not exist: {}", p.display()));
    }
    if p.exists() && !p.is_file() {
        return Err("Expected a file path, not a directory".into());
    }
    if !allowed_exts.is_empty() {
        match p.extension().and_then(|e| e.to_str()) {
            Some(ext) if allowed_exts.iter().any(|e| e.eq_ignore_ascii_case(ext)) => {}
            _ => return Err(format!("Expected a .{} file", allowed_exts.join(" / ."))),
        }
    }
    Ok(())
}

fn prompt_path_until_ok<D: PromptDriver>(
    driver: &D,
    title: &str,
    help: &str,
    default: &str,
    must_exist: bool,
    allowed_exts: &[&str],
) -> Result<PathBuf> {
    loop {
        let answer = driver.ask_string(title, help, default)?;
        match validate_path_str(&answer, must_exist, allowed_exts) {
            Ok(()) => return Ok(PathBuf::from(answer.trim())),
            Err(msg) => {
                eprintln!("✗ {}", msg);
            }
        }
    }
}
