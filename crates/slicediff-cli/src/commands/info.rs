use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use slicediff_core::io::scan::list_filtered;

#[derive(Args)]
pub struct InfoArgs {
    /// Input root directory containing both image-set subdirectories
    pub input_dir: PathBuf,

    /// Subdirectory (within the input root) containing the first image set
    #[arg(long)]
    pub subdir_a: String,

    /// Subdirectory (within the input root) containing the second image set
    #[arg(long)]
    pub subdir_b: String,

    /// Filename filter substring for the first set
    #[arg(long, default_value = "png")]
    pub filter_a: String,

    /// Filename filter substring for the second set
    #[arg(long, default_value = "png")]
    pub filter_b: String,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let dir_a = args.input_dir.join(&args.subdir_a);
    let dir_b = args.input_dir.join(&args.subdir_b);

    let files_a = list_filtered(&dir_a, &args.filter_a)
        .with_context(|| format!("Failed to list {}", dir_a.display()))?;
    let files_b = list_filtered(&dir_b, &args.filter_b)
        .with_context(|| format!("Failed to list {}", dir_b.display()))?;

    println!("{:>5}  {:<24}  {:<8}  {}", "Set", "Subdirectory", "Filter", "Matched");
    println!("{}", "-".repeat(56));
    println!(
        "{:>5}  {:<24}  {:<8}  {}",
        "A",
        args.subdir_a,
        args.filter_a,
        files_a.len()
    );
    println!(
        "{:>5}  {:<24}  {:<8}  {}",
        "B",
        args.subdir_b,
        args.filter_b,
        files_b.len()
    );
    println!();

    if files_a.is_empty() || files_b.is_empty() {
        println!("At least one image set is empty; a run would produce no slices.");
    } else if files_a.len() != files_b.len() {
        println!(
            "Image sets have differing sizes; a run would pair the first {} slices.",
            files_a.len().min(files_b.len())
        );
    } else {
        println!("Image sets pair 1:1 across {} slices.", files_a.len());
    }

    if let (Some(first), Some(last)) = (files_a.first(), files_a.last()) {
        println!(
            "Set A range: {} .. {}",
            first.file_name().unwrap_or_default().to_string_lossy(),
            last.file_name().unwrap_or_default().to_string_lossy()
        );
    }
    if let (Some(first), Some(last)) = (files_b.first(), files_b.last()) {
        println!(
            "Set B range: {} .. {}",
            first.file_name().unwrap_or_default().to_string_lossy(),
            last.file_name().unwrap_or_default().to_string_lossy()
        );
    }

    Ok(())
}
