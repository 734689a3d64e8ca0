use ndarray::Array2;

use crate::consts::{SSIM_DATA_RANGE, SSIM_K1, SSIM_K2, SSIM_WINDOW_SIZE};
use crate::error::{Result, SliceDiffError};

/// Structural similarity of one slice pair: the scalar score and the
/// full-resolution per-pixel similarity map.
#[derive(Clone, Debug)]
pub struct SsimOutput {
    /// Mean similarity over the map with the filter border cropped.
    pub score: f64,
    /// Per-pixel similarity, same dimensions as the inputs. Nominally in
    /// [-1, 1], typically [0, 1] for natural images.
    pub map: Array2<f64>,
}

/// Compute the structural similarity index between two grayscale rasters.
///
/// Local statistics are taken over a square uniform window
/// (`SSIM_WINDOW_SIZE`, reflected at the edges) with sample normalization,
/// so results track the standard windowed SSIM definition for 8-bit data.
/// The scalar score is the mean of the map with a `window/2` border
/// excluded.
pub fn ssim_full(a: &Array2<u8>, b: &Array2<u8>) -> Result<SsimOutput> {
    let (h, w) = a.dim();
    let (hb, wb) = b.dim();
    if (h, w) != (hb, wb) {
        return Err(SliceDiffError::DimensionMismatch {
            width_a: w,
            height_a: h,
            width_b: wb,
            height_b: hb,
        });
    }
    if h < SSIM_WINDOW_SIZE || w < SSIM_WINDOW_SIZE {
        return Err(SliceDiffError::InvalidDimensions { width: w, height: h });
    }

    let x = a.mapv(|v| v as f64);
    let y = b.mapv(|v| v as f64);

    let radius = SSIM_WINDOW_SIZE / 2;
    let ux = box_filter(&x, radius);
    let uy = box_filter(&y, radius);
    let uxx = box_filter(&(&x * &x), radius);
    let uyy = box_filter(&(&y * &y), radius);
    let uxy = box_filter(&(&x * &y), radius);

    // Sample (unbiased) normalization over the window population.
    let np = (SSIM_WINDOW_SIZE * SSIM_WINDOW_SIZE) as f64;
    let cov_norm = np / (np - 1.0);

    let c1 = (SSIM_K1 * SSIM_DATA_RANGE).powi(2);
    let c2 = (SSIM_K2 * SSIM_DATA_RANGE).powi(2);

    let mut map = Array2::<f64>::zeros((h, w));
    for row in 0..h {
        for col in 0..w {
            let mx = ux[[row, col]];
            let my = uy[[row, col]];
            let vx = cov_norm * (uxx[[row, col]] - mx * mx);
            let vy = cov_norm * (uyy[[row, col]] - my * my);
            let vxy = cov_norm * (uxy[[row, col]] - mx * my);

            let numerator = (2.0 * mx * my + c1) * (2.0 * vxy + c2);
            let denominator = (mx * mx + my * my + c1) * (vx + vy + c2);
            map[[row, col]] = numerator / denominator;
        }
    }

    // The filter border carries partially-reflected statistics; the scalar
    // score averages the interior only.
    let mut sum = 0.0;
    let mut count = 0usize;
    for row in radius..h - radius {
        for col in radius..w - radius {
            sum += map[[row, col]];
            count += 1;
        }
    }
    let score = sum / count as f64;

    Ok(SsimOutput { score, map })
}

/// Separable uniform (box) mean filter with reflected edge handling.
fn box_filter(data: &Array2<f64>, radius: usize) -> Array2<f64> {
    let (h, w) = data.dim();
    let size = (2 * radius + 1) as f64;
    let r = radius as isize;

    let mut horizontal = Array2::<f64>::zeros((h, w));
    for row in 0..h {
        for col in 0..w {
            let mut sum = 0.0;
            for k in -r..=r {
                sum += data[[row, reflect(col as isize + k, w)]];
            }
            horizontal[[row, col]] = sum / size;
        }
    }

    let mut out = Array2::<f64>::zeros((h, w));
    for row in 0..h {
        for col in 0..w {
            let mut sum = 0.0;
            for k in -r..=r {
                sum += horizontal[[reflect(row as isize + k, h), col]];
            }
            out[[row, col]] = sum / size;
        }
    }

    out
}

/// Mirror an out-of-range index back into [0, n) about the array edge.
/// Valid for offsets up to one full mirror period, which the window-size
/// precondition in `ssim_full` guarantees.
fn reflect(i: isize, n: usize) -> usize {
    if i < 0 {
        (-i - 1) as usize
    } else if i as usize >= n {
        2 * n - 1 - i as usize
    } else {
        i as usize
    }
}
