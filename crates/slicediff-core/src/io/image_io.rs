use std::path::Path;

use image::{GrayImage, ImageFormat, Rgb, RgbImage};
use ndarray::Array2;

use crate::error::Result;
use crate::raster::ColorRaster;

/// Load an image file into a `ColorRaster`.
///
/// Every source is normalized to RGB8, so a grayscale input becomes three
/// equal channel planes and downstream conversion stays total.
pub fn load_color(path: &Path) -> Result<ColorRaster> {
    let img = image::open(path)?;
    let rgb = img.to_rgb8();
    let (w, h) = rgb.dimensions();

    let mut red = Array2::<u8>::zeros((h as usize, w as usize));
    let mut green = Array2::<u8>::zeros((h as usize, w as usize));
    let mut blue = Array2::<u8>::zeros((h as usize, w as usize));

    for row in 0..h as usize {
        for col in 0..w as usize {
            let pixel = rgb.get_pixel(col as u32, row as u32);
            red[[row, col]] = pixel.0[0];
            green[[row, col]] = pixel.0[1];
            blue[[row, col]] = pixel.0[2];
        }
    }

    Ok(ColorRaster::new(red, green, blue))
}

/// Save a single-channel u8 raster as 8-bit grayscale PNG.
pub fn save_gray_png(data: &Array2<u8>, path: &Path) -> Result<()> {
    let (h, w) = data.dim();

    let mut img = GrayImage::new(w as u32, h as u32);
    for row in 0..h {
        for col in 0..w {
            img.put_pixel(col as u32, row as u32, image::Luma([data[[row, col]]]));
        }
    }

    img.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}

/// Save a `ColorRaster` as 8-bit RGB PNG.
pub fn save_color_png(raster: &ColorRaster, path: &Path) -> Result<()> {
    let h = raster.height();
    let w = raster.width();

    let mut img = RgbImage::new(w as u32, h as u32);
    for row in 0..h {
        for col in 0..w {
            img.put_pixel(
                col as u32,
                row as u32,
                Rgb([
                    raster.red[[row, col]],
                    raster.green[[row, col]],
                    raster.blue[[row, col]],
                ]),
            );
        }
    }

    img.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}
