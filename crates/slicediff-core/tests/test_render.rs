use ndarray::Array2;

use slicediff_core::raster::{Bounds, ColorRaster};
use slicediff_core::render::colormap::apply_hot;
use slicediff_core::render::overlay::draw_rect;

#[test]
fn test_hot_endpoints() {
    let data = Array2::from_shape_vec((1, 2), vec![0u8, 255u8]).unwrap();
    let colored = apply_hot(&data);

    assert_eq!(colored.red[[0, 0]], 0);
    assert_eq!(colored.green[[0, 0]], 0);
    assert_eq!(colored.blue[[0, 0]], 0);

    assert_eq!(colored.red[[0, 1]], 255);
    assert_eq!(colored.green[[0, 1]], 255);
    assert_eq!(colored.blue[[0, 1]], 255);
}

#[test]
fn test_hot_midrange_is_red_dominant() {
    let data = Array2::from_elem((1, 1), 100u8);
    let colored = apply_hot(&data);

    assert_eq!(colored.red[[0, 0]], 255);
    assert!(colored.green[[0, 0]] < 128);
    assert_eq!(colored.blue[[0, 0]], 0);
}

fn white_raster(h: usize, w: usize) -> ColorRaster {
    ColorRaster::new(
        Array2::from_elem((h, w), 255),
        Array2::from_elem((h, w), 255),
        Array2::from_elem((h, w), 255),
    )
}

#[test]
fn test_rect_outline_leaves_interior_untouched() {
    let mut raster = white_raster(12, 12);
    let bounds = Bounds {
        x: 2,
        y: 3,
        width: 6,
        height: 5,
    };
    draw_rect(&mut raster, bounds, [255, 0, 0], 1);

    // Corners of the outline.
    assert_eq!(raster.green[[3, 2]], 0);
    assert_eq!(raster.green[[7, 7]], 0);
    // Interior and exterior stay white.
    assert_eq!(raster.green[[5, 4]], 255);
    assert_eq!(raster.green[[0, 0]], 255);
    assert_eq!(raster.green[[8, 2]], 255);
}

#[test]
fn test_thickness_draws_inward_rings() {
    let mut raster = white_raster(12, 12);
    let bounds = Bounds {
        x: 1,
        y: 1,
        width: 8,
        height: 8,
    };
    draw_rect(&mut raster, bounds, [255, 0, 0], 2);

    assert_eq!(raster.green[[1, 1]], 0);
    assert_eq!(raster.green[[2, 2]], 0);
    assert_eq!(raster.green[[3, 3]], 255);
}

#[test]
fn test_rect_clamps_to_raster_edge() {
    let mut raster = white_raster(8, 8);
    let bounds = Bounds {
        x: 5,
        y: 5,
        width: 10,
        height: 10,
    };
    draw_rect(&mut raster, bounds, [255, 0, 0], 1);

    // Clamped border drawn at the raster edge, nothing panics.
    assert_eq!(raster.green[[5, 5]], 0);
    assert_eq!(raster.green[[7, 5]], 0);
    assert_eq!(raster.green[[5, 7]], 0);
}
