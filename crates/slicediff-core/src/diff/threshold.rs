use ndarray::Array2;

use crate::consts::OTSU_HISTOGRAM_BINS;

/// Otsu's thresholding over a u8 raster: find the intensity that maximizes
/// between-class variance (equivalently, minimizes intra-class variance).
pub fn otsu_level(data: &Array2<u8>) -> u8 {
    let mut histogram = vec![0u64; OTSU_HISTOGRAM_BINS];
    for &v in data.iter() {
        histogram[v as usize] += 1;
    }

    let total = data.len() as f64;
    let mut sum_all: f64 = 0.0;
    for (i, &count) in histogram.iter().enumerate() {
        sum_all += i as f64 * count as f64;
    }

    let mut weight_bg: f64 = 0.0;
    let mut sum_bg: f64 = 0.0;
    let mut best_variance = 0.0_f64;
    let mut best_bin = 0usize;

    for (i, &count) in histogram.iter().enumerate() {
        weight_bg += count as f64;
        if weight_bg == 0.0 {
            continue;
        }
        let weight_fg = total - weight_bg;
        if weight_fg == 0.0 {
            break;
        }
        sum_bg += i as f64 * count as f64;
        let mean_bg = sum_bg / weight_bg;
        let mean_fg = (sum_all - sum_bg) / weight_fg;
        let between_variance = weight_bg * weight_fg * (mean_bg - mean_fg).powi(2);

        if between_variance > best_variance {
            best_variance = between_variance;
            best_bin = i;
        }
    }

    best_bin as u8
}

/// Inverted binary threshold: values at or below `level` map to 255,
/// values above it to 0.
pub fn threshold_inv(data: &Array2<u8>, level: u8) -> Array2<u8> {
    data.mapv(|v| if v > level { 0 } else { 255 })
}
