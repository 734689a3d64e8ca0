pub mod contour;
pub mod ssim;
pub mod threshold;

use ndarray::Array2;

use crate::error::{Result, SliceDiffError};
use crate::raster::{Bounds, ColorRaster};

use ssim::SsimOutput;

/// Per-slice derived data: score, normalized difference raster, binary
/// threshold mask, and the bounding rectangles of its external contours.
#[derive(Clone, Debug)]
pub struct SliceDiff {
    pub score: f64,
    pub diff: Array2<u8>,
    pub mask: Array2<u8>,
    pub contours: Vec<Bounds>,
}

/// Compute the full difference artifact set for one grayscale slice pair.
pub fn diff_slice(gray_a: &Array2<u8>, gray_b: &Array2<u8>) -> Result<SliceDiff> {
    let SsimOutput { score, map } = ssim::ssim_full(gray_a, gray_b)?;
    let diff = normalize_map(&map);
    let level = threshold::otsu_level(&diff);
    let mask = threshold::threshold_inv(&diff, level);
    let contours = contour::external_contours(&mask);

    Ok(SliceDiff {
        score,
        diff,
        mask,
        contours,
    })
}

/// Rescale a similarity map to 8-bit intensity: multiply by 255 and
/// truncate. The saturating cast clips negative similarity to 0 and
/// anything above the range to 255.
pub fn normalize_map(map: &Array2<f64>) -> Array2<u8> {
    map.mapv(|v| (v * 255.0) as u8)
}

/// Per-pixel maximum channel absolute difference between two color slices.
pub fn naive_diff(a: &ColorRaster, b: &ColorRaster) -> Result<Array2<u8>> {
    let (h, w) = a.red.dim();
    if (h, w) != b.red.dim() {
        return Err(SliceDiffError::DimensionMismatch {
            width_a: w,
            height_a: h,
            width_b: b.width(),
            height_b: b.height(),
        });
    }

    let mut out = Array2::<u8>::zeros((h, w));
    for row in 0..h {
        for col in 0..w {
            let dr = a.red[[row, col]].abs_diff(b.red[[row, col]]);
            let dg = a.green[[row, col]].abs_diff(b.green[[row, col]]);
            let db = a.blue[[row, col]].abs_diff(b.blue[[row, col]]);
            out[[row, col]] = dr.max(dg).max(db);
        }
    }

    Ok(out)
}
