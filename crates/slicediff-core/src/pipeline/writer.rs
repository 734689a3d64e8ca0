use std::fs;

use tracing::info;

use crate::consts::{CONTOUR_RECT_COLOR, CONTOUR_RECT_THICKNESS};
use crate::diff::naive_diff;
use crate::error::Result;
use crate::io::image_io::{save_color_png, save_gray_png};
use crate::render::colormap::apply_hot;
use crate::render::overlay::draw_rect;

use super::config::DiffConfig;
use super::context::RunContext;
use super::report::{ProgressReporter, StageName, StageReport};

/// The five fixed output categories, each mapped 1:1 to a subdirectory of
/// the output root.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputCategory {
    Naive,
    Heatmap,
    Threshold,
    ContourA,
    ContourB,
}

impl OutputCategory {
    pub const ALL: [OutputCategory; 5] = [
        OutputCategory::Naive,
        OutputCategory::Heatmap,
        OutputCategory::Threshold,
        OutputCategory::ContourA,
        OutputCategory::ContourB,
    ];

    pub fn dir_name(self) -> &'static str {
        match self {
            Self::Naive => "naive",
            Self::Heatmap => "heatmap",
            Self::Threshold => "threshold",
            Self::ContourA => "contourA",
            Self::ContourB => "contourB",
        }
    }
}

/// Zero-padded per-slice output filename.
pub fn slice_file_name(index: usize) -> String {
    format!("slice-{index:03}.png")
}

/// Stage 5: write all derived rasters and both JSON summaries.
///
/// Always runs: category directories and the two JSON files are produced
/// even when an earlier stage failed (the slice loop then writes nothing).
pub(super) fn write_outputs(
    ctx: &mut RunContext,
    config: &DiffConfig,
    reporter: &dyn ProgressReporter,
) -> Result<()> {
    for category in OutputCategory::ALL {
        fs::create_dir_all(config.output.join(category.dir_name()))?;
    }

    let proceed = ctx.all_ok();
    let mut written = 0usize;

    if proceed {
        reporter.begin_stage(StageName::Write, Some(ctx.slices.len()));
        for (i, slice) in ctx.slices.iter().enumerate() {
            let name = slice_file_name(i);

            let raw = naive_diff(&ctx.color_a[i], &ctx.color_b[i])?;
            save_color_png(
                &apply_hot(&raw),
                &config
                    .output
                    .join(OutputCategory::Naive.dir_name())
                    .join(&name),
            )?;

            save_color_png(
                &apply_hot(&slice.diff),
                &config
                    .output
                    .join(OutputCategory::Heatmap.dir_name())
                    .join(&name),
            )?;

            save_gray_png(
                &slice.mask,
                &config
                    .output
                    .join(OutputCategory::Threshold.dir_name())
                    .join(&name),
            )?;

            // All rectangles are drawn before the single write per file.
            let mut overlay_a = ctx.color_a[i].clone();
            let mut overlay_b = ctx.color_b[i].clone();
            for bounds in &slice.contours {
                draw_rect(
                    &mut overlay_a,
                    *bounds,
                    CONTOUR_RECT_COLOR,
                    CONTOUR_RECT_THICKNESS,
                );
                draw_rect(
                    &mut overlay_b,
                    *bounds,
                    CONTOUR_RECT_COLOR,
                    CONTOUR_RECT_THICKNESS,
                );
            }
            save_color_png(
                &overlay_a,
                &config
                    .output
                    .join(OutputCategory::ContourA.dir_name())
                    .join(&name),
            )?;
            save_color_png(
                &overlay_b,
                &config
                    .output
                    .join(OutputCategory::ContourB.dir_name())
                    .join(&name),
            )?;

            written += 1;
            reporter.advance(written);
        }
        reporter.finish_stage();
    }

    let mut report = if proceed {
        StageReport::new(
            StageName::Write,
            true,
            format!("wrote {written} slices across 5 output categories"),
        )
    } else {
        StageReport::new(
            StageName::Write,
            false,
            "skipped slice output, a prior stage reported failure; summary artifacts written",
        )
    };
    report.written_count = Some(written);
    ctx.reports.push(report);

    // The JSON summaries are mandatory regardless of success or failure.
    let scores = ctx.scores();
    fs::write(
        config.output.join("SSIN.json"),
        serde_json::to_string_pretty(&scores)?,
    )?;
    fs::write(
        config.output.join("run.json"),
        serde_json::to_string_pretty(&ctx.run_report())?,
    )?;

    info!(written, output = %config.output.display(), "Outputs written");
    Ok(())
}
