use ndarray::Array2;

use crate::consts::{LUMINANCE_B, LUMINANCE_G, LUMINANCE_R};
use crate::raster::ColorRaster;

/// Convert a `ColorRaster` to single-channel intensity using ITU-R BT.601
/// weights, rounded to the nearest 8-bit value.
pub fn luminance(raster: &ColorRaster) -> Array2<u8> {
    let (h, w) = raster.red.dim();
    let mut data = Array2::<u8>::zeros((h, w));

    for row in 0..h {
        for col in 0..w {
            let y = LUMINANCE_R * raster.red[[row, col]] as f32
                + LUMINANCE_G * raster.green[[row, col]] as f32
                + LUMINANCE_B * raster.blue[[row, col]] as f32;
            data[[row, col]] = y.round().clamp(0.0, 255.0) as u8;
        }
    }

    data
}
