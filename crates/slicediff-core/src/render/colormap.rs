use ndarray::Array2;

use crate::raster::ColorRaster;

/// False-color a u8 intensity raster through the "hot" ramp
/// (black → red → yellow → white).
pub fn apply_hot(data: &Array2<u8>) -> ColorRaster {
    let (h, w) = data.dim();
    let mut red = Array2::<u8>::zeros((h, w));
    let mut green = Array2::<u8>::zeros((h, w));
    let mut blue = Array2::<u8>::zeros((h, w));

    for row in 0..h {
        for col in 0..w {
            let t = data[[row, col]] as f32 / 255.0;
            let (r, g, b) = hot(t);
            red[[row, col]] = r;
            green[[row, col]] = g;
            blue[[row, col]] = b;
        }
    }

    ColorRaster::new(red, green, blue)
}

/// Hot ramp: red rises over the first third, green over the second,
/// blue over the last.
fn hot(t: f32) -> (u8, u8, u8) {
    let r = (3.0 * t).clamp(0.0, 1.0);
    let g = (3.0 * t - 1.0).clamp(0.0, 1.0);
    let b = (3.0 * t - 2.0).clamp(0.0, 1.0);
    (
        (r * 255.0).round() as u8,
        (g * 255.0).round() as u8,
        (b * 255.0).round() as u8,
    )
}
