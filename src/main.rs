//! arules - mine association rules from attribute and training files.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::{ArgAction, Parser, ValueEnum};
use tracing::warn;
use tracing_subscriber::EnvFilter;

use arules::ap::{CancelToken, MiningObserver, NoopObserver, TracingObserver, associate};
use arules::config::{MiningConfig, ThresholdScale};
use arules::io::{ItemsetDisplay, RuleDisplay, load_dataset};

/// Mine frequent itemsets and association rules with Apriori.
#[derive(Debug, Parser)]
#[command(name = "arules")]
#[command(version, about, long_about = None)]
struct Cli {
    /// NAME (reads NAME-attr.txt and NAME.txt) or ATTRIBUTE_FILE TRAINING_FILE
    #[arg(required = true, num_args = 1..=2, value_name = "FILES")]
    files: Vec<PathBuf>,

    /// Minimum support, scaled according to --scale
    #[arg(short = 's', long)]
    min_support: Option<f64>,

    /// Minimum confidence in [0, 1]
    #[arg(short = 'c', long)]
    min_confidence: Option<f64>,

    /// How minimum support becomes a record count
    #[arg(long, value_enum)]
    scale: Option<CliScale>,

    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Count supports on the current thread only
    #[arg(long)]
    sequential: bool,

    /// Skip Apriori subset pruning of candidates
    #[arg(long)]
    no_subset_pruning: bool,

    /// Abort mining after this many milliseconds
    #[arg(long)]
    deadline_ms: Option<u64>,

    /// Increase verbosity (-v progress, -vv levels, -vvv itemsets)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliScale {
    /// Multiply by the number of items
    Items,
    /// Multiply by the number of records
    Records,
    /// Use as a record count
    Absolute,
}

impl From<CliScale> for ThresholdScale {
    fn from(scale: CliScale) -> Self {
        match scale {
            CliScale::Items => ThresholdScale::ItemCount,
            CliScale::Records => ThresholdScale::RecordCount,
            CliScale::Absolute => ThresholdScale::Absolute,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "arules=warn",
        1 => "arules=info",
        2 => "arules=debug",
        _ => "arules=trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let (attribute_path, training_path) = match cli.files.as_slice() {
        [name] => {
            let name = name.to_string_lossy();
            (
                PathBuf::from(format!("{name}-attr.txt")),
                PathBuf::from(format!("{name}.txt")),
            )
        }
        [attributes, training] => (attributes.clone(), training.clone()),
        _ => bail!("expected NAME or ATTRIBUTE_FILE TRAINING_FILE"),
    };

    let dataset = load_dataset(&attribute_path, &training_path).with_context(|| {
        format!(
            "loading {} and {}",
            attribute_path.display(),
            training_path.display()
        )
    })?;

    if dataset.universe.is_empty() || dataset.records.is_empty() {
        warn!("no attributes or no training records, nothing to mine");
        return Ok(());
    }

    let mut config = match &cli.config {
        Some(path) => MiningConfig::from_file(path)?,
        None => MiningConfig::default(),
    };

    if cli.min_support.is_some() {
        config.min_support = cli.min_support;
    }
    if cli.min_confidence.is_some() {
        config.min_confidence = cli.min_confidence;
    }
    config.fill_thresholds(prompt)?;
    if let Some(scale) = cli.scale {
        config.scale = scale.into();
    }
    if cli.sequential {
        config.parallel = false;
    }
    if cli.no_subset_pruning {
        config.prune_subsets = false;
    }
    if cli.deadline_ms.is_some() {
        config.deadline_ms = cli.deadline_ms;
    }

    let mut tracing_observer = TracingObserver;
    let mut noop_observer = NoopObserver;
    let observer: &mut dyn MiningObserver = if cli.verbose > 0 {
        &mut tracing_observer
    } else {
        &mut noop_observer
    };

    let cancel = config.cancel_token();
    let association = associate(
        &dataset.universe,
        &dataset.records,
        &config,
        observer,
        &cancel,
    )?;

    let mut out = std::io::stdout().lock();
    if cli.verbose > 0 {
        writeln!(out, "\nFrequent itemsets")?;
        for (items, support) in association.frequent.iter_with_support() {
            writeln!(
                out,
                "{}\t(support {})",
                ItemsetDisplay::new(items, &dataset.universe),
                support
            )?;
        }
    }

    writeln!(out, "\nAssociation rules")?;
    for rule in &association.rules {
        writeln!(
            out,
            "{}\t(confidence {:.3})",
            RuleDisplay::new(rule, &dataset.universe),
            rule.confidence
        )?;
    }

    Ok(())
}

fn prompt(label: &str) -> anyhow::Result<f64> {
    print!("{label}: ");
    std::io::stdout().flush()?;

    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;
    line.trim()
        .parse::<f64>()
        .with_context(|| format!("{label} must be a number, got {:?}", line.trim()))
}
