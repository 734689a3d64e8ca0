use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use slicediff_core::pipeline::config::DiffConfig;
use slicediff_core::pipeline::{run_pipeline_reported, ProgressReporter, StageName};

use crate::summary;

#[derive(Args)]
pub struct RunArgs {
    /// Input root directory containing both image-set subdirectories
    pub input_dir: PathBuf,

    /// Output root directory for the derived image tree and JSON summaries
    pub output_dir: PathBuf,

    /// Subdirectory (within the input root) containing the first image set
    #[arg(long)]
    pub subdir_a: Option<String>,

    /// Subdirectory (within the input root) containing the second image set
    #[arg(long)]
    pub subdir_b: Option<String>,

    /// Filename filter substring for the first set
    #[arg(long, default_value = "png")]
    pub filter_a: String,

    /// Filename filter substring for the second set
    #[arg(long, default_value = "png")]
    pub filter_b: String,

    /// Diff config file (TOML), used in place of the other options
    #[arg(long)]
    pub config: Option<PathBuf>,
}

struct BarReporter {
    pb: ProgressBar,
}

impl ProgressReporter for BarReporter {
    fn begin_stage(&self, stage: StageName, total_items: Option<usize>) {
        self.pb.set_length(total_items.unwrap_or(0) as u64);
        self.pb.set_position(0);
        self.pb.set_message(stage.to_string());
    }

    fn advance(&self, items_done: usize) {
        self.pb.set_position(items_done as u64);
    }
}

pub fn run(args: &RunArgs) -> Result<()> {
    let config = if let Some(ref config_path) = args.config {
        let contents = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config {}", config_path.display()))?;
        toml::from_str(&contents).context("Invalid diff config")?
    } else {
        build_config_from_args(args)?
    };

    summary::print_run_summary(&config);

    let pb = ProgressBar::new(0);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg:24} [{bar:40}] {pos}/{len}")?
            .progress_chars("=> "),
    );
    let reporter = BarReporter { pb: pb.clone() };

    let ctx = run_pipeline_reported(&config, &reporter)?;
    pb.finish_and_clear();

    summary::print_run_outcome(&ctx);
    println!("\nOutput saved to {}", config.output.display());

    Ok(())
}

fn build_config_from_args(args: &RunArgs) -> Result<DiffConfig> {
    let Some(ref subdir_a) = args.subdir_a else {
        bail!("--subdir-a is required (or pass --config)");
    };
    let Some(ref subdir_b) = args.subdir_b else {
        bail!("--subdir-b is required (or pass --config)");
    };

    Ok(DiffConfig {
        input: args.input_dir.clone(),
        output: args.output_dir.clone(),
        subdir_a: subdir_a.clone(),
        subdir_b: subdir_b.clone(),
        filter_a: args.filter_a.clone(),
        filter_b: args.filter_b.clone(),
    })
}
