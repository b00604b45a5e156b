use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use sylva::config::ComparisonConfig;
use sylva::data::{AttributeValues, Dataset, TestSize, read_dataset, supplier_dataset, write_dataset};
use sylva::evaluation::SummaryFormat;
use sylva::tasks::{ComparisonReport, ComparisonTask};
use sylva::tree::{Criterion, TreeBuilder, TreeNode, classify};
use sylva::ui::drivers::InquireDriver;
use sylva::ui::prompt_config;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "sylva")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Compare ID3, C4.5, CART and CHAID decision trees", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Split the dataset once and score every selected algorithm on it
    Compare(CompareArgs),

    /// Build one tree on the whole dataset and print it
    Tree {
        /// ';'-separated dataset file (built-in supplier table if omitted)
        #[arg(short, long)]
        dataset: Option<PathBuf>,

        /// Split criterion: id3, c45, cart, chaid or a full name
        #[arg(short, long, default_value = "id3", value_parser = Criterion::parse)]
        criterion: Criterion,

        /// Print the tree as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Classify one example with a tree built on the whole dataset
    Classify {
        #[arg(short, long)]
        dataset: Option<PathBuf>,

        #[arg(short, long, default_value = "id3", value_parser = Criterion::parse)]
        criterion: Criterion,

        /// Attribute values as ATTR=VALUE
        #[arg(required = true, value_parser = parse_assignment)]
        values: Vec<(String, String)>,
    },

    /// Write the built-in supplier table as a ';'-separated file
    ExportDataset {
        path: PathBuf,
    },

    /// Assemble a comparison interactively, then run it
    Wizard,
}

#[derive(Args, Default)]
struct CompareArgs {
    /// JSON config file; flags given here override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// ';'-separated dataset file (built-in supplier table if omitted)
    #[arg(short, long)]
    dataset: Option<PathBuf>,

    /// Held-out examples: a count like 4 or a fraction like 0.3
    #[arg(long)]
    test_size: Option<TestSize>,

    #[arg(long)]
    seed: Option<u64>,

    /// Class label treated as positive for F1
    #[arg(long)]
    positive: Option<String>,

    /// Repeat to select several; all four when omitted
    #[arg(long = "criterion", value_parser = Criterion::parse)]
    criteria: Vec<Criterion>,

    /// Evaluate the algorithms on a thread pool
    #[arg(long)]
    parallel: bool,

    /// Save the summary table; .csv, .tsv or .json
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn parse_assignment(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((k, v)) if !k.trim().is_empty() => Ok((k.trim().to_string(), v.trim().to_string())),
        _ => Err(format!("expected ATTR=VALUE, got '{s}'")),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sylva=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        None => cmd_compare(resolve_config(CompareArgs::default())?)?,
        Some(Commands::Compare(args)) => cmd_compare(resolve_config(args)?)?,
        Some(Commands::Tree {
            dataset,
            criterion,
            json,
        }) => {
            let tree = build_full_tree(dataset.as_deref(), criterion)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&tree)?);
            } else {
                println!(
                    "{} ({}): {} nodes, {} leaves, depth {}",
                    criterion.algorithm_name(),
                    criterion,
                    tree.node_count(),
                    tree.leaf_count(),
                    tree.depth()
                );
                print!("{tree}");
            }
        }
        Some(Commands::Classify {
            dataset,
            criterion,
            values,
        }) => cmd_classify(dataset.as_deref(), criterion, values)?,
        Some(Commands::ExportDataset { path }) => {
            let ds = supplier_dataset();
            write_dataset(&path, &ds).with_context(|| format!("writing {}", path.display()))?;
            println!("Wrote {} examples to {}", ds.len(), path.display());
        }
        Some(Commands::Wizard) => {
            let config = prompt_config(&InquireDriver)?;
            cmd_compare(config)?;
        }
    }

    Ok(())
}

fn resolve_config(args: CompareArgs) -> Result<ComparisonConfig> {
    let mut config = match &args.config {
        Some(path) => ComparisonConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => ComparisonConfig::default(),
    };
    if let Some(dataset) = args.dataset {
        config.dataset = Some(dataset);
    }
    if let Some(test_size) = args.test_size {
        config.test_size = test_size;
    }
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if let Some(positive) = args.positive {
        config.positive_label = positive;
    }
    if !args.criteria.is_empty() {
        config.criteria = args.criteria;
    }
    if args.parallel {
        config.parallel = true;
    }
    if let Some(output) = args.output {
        config.output = Some(output);
    }
    Ok(config)
}

fn cmd_compare(config: ComparisonConfig) -> Result<()> {
    let task = ComparisonTask::new(config)?;
    let report = task.execute().context("comparison failed")?;
    print_report(&report);

    if let Some(path) = &task.config().output {
        report
            .table
            .export(path, SummaryFormat::from_path(path))
            .with_context(|| format!("writing summary to {}", path.display()))?;
        info!(path = %path.display(), "summary written");
    }
    Ok(())
}

fn print_report(report: &ComparisonReport) {
    println!(
        "Training examples: {}, test examples: {}",
        report.train_len, report.test_len
    );
    println!("Majority baseline accuracy: {:.4}", report.baseline_accuracy);
    println!();
    print!("{}", report.table);
}

fn load_dataset(path: Option<&Path>) -> Result<Dataset> {
    match path {
        Some(p) => read_dataset(p).with_context(|| format!("reading dataset {}", p.display())),
        None => Ok(supplier_dataset()),
    }
}

fn build_full_tree(path: Option<&Path>, criterion: Criterion) -> Result<TreeNode> {
    let ds = load_dataset(path)?;
    Ok(TreeBuilder::new(criterion).build(ds.examples(), ds.attribute_names())?)
}

fn cmd_classify(path: Option<&Path>, criterion: Criterion, values: Vec<(String, String)>) -> Result<()> {
    let ds = load_dataset(path)?;
    let tree = TreeBuilder::new(criterion).build(ds.examples(), ds.attribute_names())?;

    let input: AttributeValues = values.into_iter().collect();
    for name in input.keys() {
        if !ds.attribute_names().contains(name) {
            warn!(attribute = %name, "not an attribute of this dataset; ignored");
        }
    }
    if input.is_empty() {
        bail!("no attribute values given");
    }

    match classify(&tree, &input) {
        Some(label) => println!("{label}"),
        None => println!("unknown"),
    }
    Ok(())
}
