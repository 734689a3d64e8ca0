use tracing::info;

use crate::color::luminance;
use crate::diff::diff_slice;
use crate::error::Result;
use crate::io::image_io::load_color;
use crate::io::scan::list_filtered;

use super::config::DiffConfig;
use super::context::RunContext;
use super::report::{NoOpReporter, ProgressReporter, StageName, StageReport};
use super::writer::write_outputs;

/// Run the full difference pipeline.
pub fn run_pipeline(config: &DiffConfig) -> Result<RunContext> {
    run_pipeline_reported(config, &NoOpReporter)
}

/// Run the full difference pipeline with progress reporting.
///
/// The five stages always execute in order and each appends exactly one
/// report; a stage whose predecessor failed skips its work. Stage-level
/// faults (empty sets, unreadable files, mismatched dimensions) are soft
/// and end up in `run.json`; only faults that prevent the writer from
/// producing its mandatory artifacts surface as `Err`.
pub fn run_pipeline_reported(
    config: &DiffConfig,
    reporter: &dyn ProgressReporter,
) -> Result<RunContext> {
    let mut ctx = RunContext::new();

    enumerate_stage(&mut ctx, config);
    load_stage(&mut ctx, reporter);
    grayscale_stage(&mut ctx);
    diff_stage(&mut ctx, reporter);
    write_outputs(&mut ctx, config, reporter)?;

    Ok(ctx)
}

/// Stage 1: list and filter the two input subdirectories.
fn enumerate_stage(ctx: &mut RunContext, config: &DiffConfig) {
    info!(
        dir_a = %config.dir_a().display(),
        dir_b = %config.dir_b().display(),
        "Enumerating image sets"
    );

    let listed = list_filtered(&config.dir_a(), &config.filter_a)
        .and_then(|a| list_filtered(&config.dir_b(), &config.filter_b).map(|b| (a, b)));

    let report = match listed {
        Ok((a, b)) => {
            let (size_a, size_b) = (a.len(), b.len());
            ctx.files_a = a;
            ctx.files_b = b;

            let (ok, message) = if size_a == 0 || size_b == 0 {
                (
                    false,
                    format!("at least one image set was empty, {size_a} and {size_b}"),
                )
            } else if size_a != size_b {
                // Pairing still proceeds up to the shorter set.
                (
                    true,
                    format!(
                        "image sets have differing numbers of constituent images, {size_a} and {size_b}"
                    ),
                )
            } else {
                (
                    true,
                    "determined image files to load and checks pass".to_string(),
                )
            };

            let mut report = StageReport::new(StageName::Enumerate, ok, message);
            report.size_set_a = Some(size_a);
            report.size_set_b = Some(size_b);
            report
        }
        Err(e) => StageReport::new(
            StageName::Enumerate,
            false,
            format!("cannot list input files: {e}"),
        ),
    };

    info!(ok = report.ok, message = %report.message, "Enumeration done");
    ctx.reports.push(report);
}

/// Stage 2: decode each filename pair, up to the shorter list length.
fn load_stage(ctx: &mut RunContext, reporter: &dyn ProgressReporter) {
    if !ctx.all_ok() {
        ctx.reports.push(StageReport::skipped(StageName::Load));
        return;
    }

    let pairs = ctx.files_a.len().min(ctx.files_b.len());
    reporter.begin_stage(StageName::Load, Some(pairs));

    let mut failure: Option<String> = None;
    for i in 0..pairs {
        let loaded = load_color(&ctx.files_a[i])
            .map_err(|e| (ctx.files_a[i].clone(), e))
            .and_then(|a| {
                load_color(&ctx.files_b[i])
                    .map_err(|e| (ctx.files_b[i].clone(), e))
                    .map(|b| (a, b))
            });

        match loaded {
            Ok((a, b)) => {
                ctx.color_a.push(a);
                ctx.color_b.push(b);
                reporter.advance(i + 1);
            }
            Err((path, e)) => {
                failure = Some(format!("failed to read {}: {e}", path.display()));
                break;
            }
        }
    }
    reporter.finish_stage();

    let read_count = ctx.color_a.len();
    info!(read_count, "Image pairs read");

    let mut report = match failure {
        None => StageReport::new(
            StageName::Load,
            true,
            format!("read {read_count} image pairs"),
        ),
        Some(message) => StageReport::new(StageName::Load, false, message),
    };
    report.read_count = Some(read_count);
    ctx.reports.push(report);
}

/// Stage 3: convert each decoded pair to single-channel intensity.
fn grayscale_stage(ctx: &mut RunContext) {
    if !ctx.all_ok() {
        ctx.reports.push(StageReport::skipped(StageName::Grayscale));
        return;
    }

    for i in 0..ctx.color_a.len() {
        ctx.gray_a.push(luminance(&ctx.color_a[i]));
        ctx.gray_b.push(luminance(&ctx.color_b[i]));
    }

    let converted = ctx.gray_a.len();
    info!(converted, "Converted image pairs to grayscale");

    let mut report = StageReport::new(
        StageName::Grayscale,
        true,
        format!("converted {converted} image pairs to grayscale"),
    );
    report.converted_count = Some(converted);
    ctx.reports.push(report);
}

/// Stage 4: per slice, compute SSIM, difference raster, threshold mask,
/// and contour bounding rectangles.
fn diff_stage(ctx: &mut RunContext, reporter: &dyn ProgressReporter) {
    if !ctx.all_ok() {
        ctx.reports.push(StageReport::skipped(StageName::Diff));
        return;
    }

    let pairs = ctx.gray_a.len().min(ctx.gray_b.len());
    reporter.begin_stage(StageName::Diff, Some(pairs));

    let mut failure: Option<String> = None;
    for i in 0..pairs {
        match diff_slice(&ctx.gray_a[i], &ctx.gray_b[i]) {
            Ok(slice) => {
                ctx.slices.push(slice);
                reporter.advance(i + 1);
            }
            Err(e) => {
                failure = Some(format!("cannot diff slice {i}: {e}"));
                break;
            }
        }
    }
    reporter.finish_stage();

    let slice_count = ctx.slices.len();
    info!(slice_count, "Difference, threshold, and contour computed");

    let mut report = match failure {
        None => StageReport::new(
            StageName::Diff,
            true,
            format!("computed difference, threshold, and contour for {slice_count} slices"),
        ),
        Some(message) => StageReport::new(StageName::Diff, false, message),
    };
    report.slice_count = Some(slice_count);
    ctx.reports.push(report);
}
