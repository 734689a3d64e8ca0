#![allow(dead_code)]

use std::path::Path;

use image::{Rgb, RgbImage};

/// Build a solid-color RGB image.
pub fn solid_image(width: u32, height: u32, color: [u8; 3]) -> RgbImage {
    RgbImage::from_pixel(width, height, Rgb(color))
}

/// Build a deterministic textured RGB image.
pub fn textured_image(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        let v = ((x * 13 + y * 7) % 251) as u8;
        Rgb([v, v.wrapping_add(40), v / 2])
    })
}

/// Build a `bg`-colored image with a filled `fg` rectangle at
/// (x, y) with size rect_w x rect_h.
pub fn rect_image(
    width: u32,
    height: u32,
    bg: [u8; 3],
    fg: [u8; 3],
    x: u32,
    y: u32,
    rect_w: u32,
    rect_h: u32,
) -> RgbImage {
    let mut img = solid_image(width, height, bg);
    for yy in y..(y + rect_h).min(height) {
        for xx in x..(x + rect_w).min(width) {
            img.put_pixel(xx, yy, Rgb(fg));
        }
    }
    img
}

/// Write `img` as a PNG under each of `names` inside `dir`, creating the
/// directory first.
pub fn write_set(dir: &Path, names: &[&str], img: &RgbImage) {
    std::fs::create_dir_all(dir).expect("create set dir");
    for name in names {
        img.save(dir.join(name)).expect("write png");
    }
}
