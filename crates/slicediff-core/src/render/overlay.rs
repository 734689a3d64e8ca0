use crate::raster::{Bounds, ColorRaster};

/// Draw an outlined (unfilled) rectangle of the given thickness onto a
/// color raster. Rings are drawn inward from the bounds; out-of-range
/// coordinates are clamped to the raster.
pub fn draw_rect(raster: &mut ColorRaster, bounds: Bounds, color: [u8; 3], thickness: usize) {
    let h = raster.height();
    let w = raster.width();
    if h == 0 || w == 0 || bounds.width == 0 || bounds.height == 0 {
        return;
    }

    for t in 0..thickness {
        let x0 = bounds.x + t;
        let y0 = bounds.y + t;
        let x1 = bounds.right().saturating_sub(t).min(w - 1);
        let y1 = bounds.bottom().saturating_sub(t).min(h - 1);
        if x0 > x1 || y0 > y1 || x0 >= w || y0 >= h {
            continue;
        }

        for x in x0..=x1 {
            put(raster, y0, x, color);
            put(raster, y1, x, color);
        }
        for y in y0..=y1 {
            put(raster, y, x0, color);
            put(raster, y, x1, color);
        }
    }
}

fn put(raster: &mut ColorRaster, row: usize, col: usize, color: [u8; 3]) {
    raster.red[[row, col]] = color[0];
    raster.green[[row, col]] = color[1];
    raster.blue[[row, col]] = color[2];
}
