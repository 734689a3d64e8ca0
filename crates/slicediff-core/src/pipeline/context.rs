use std::path::PathBuf;

use ndarray::Array2;

use crate::diff::SliceDiff;
use crate::raster::ColorRaster;

use super::report::{RunReport, StageReport};

/// Run-scoped owner of every per-slice list the stages produce.
///
/// All rasters for a run live here for the run's duration; nothing is
/// shared across runs. Each stage appends to its own lists and pushes one
/// `StageReport`; earlier stages' data is never mutated.
#[derive(Default)]
pub struct RunContext {
    pub files_a: Vec<PathBuf>,
    pub files_b: Vec<PathBuf>,
    pub color_a: Vec<ColorRaster>,
    pub color_b: Vec<ColorRaster>,
    pub gray_a: Vec<Array2<u8>>,
    pub gray_b: Vec<Array2<u8>>,
    pub slices: Vec<SliceDiff>,
    pub reports: Vec<StageReport>,
}

impl RunContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// True while no completed stage has reported failure. Stages check
    /// this before doing any work.
    pub fn all_ok(&self) -> bool {
        self.reports.iter().all(|r| r.ok)
    }

    /// Per-slice SSIM scores, index-ordered.
    pub fn scores(&self) -> Vec<f64> {
        self.slices.iter().map(|s| s.score).collect()
    }

    pub fn run_report(&self) -> RunReport {
        RunReport {
            ok: self.all_ok(),
            stages: self.reports.clone(),
        }
    }
}
