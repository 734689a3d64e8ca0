use ndarray::Array2;

use slicediff_core::diff::contour::external_contours;
use slicediff_core::raster::Bounds;

fn mask_with_block(h: usize, w: usize, y: usize, x: usize, bh: usize, bw: usize) -> Array2<u8> {
    let mut mask = Array2::<u8>::zeros((h, w));
    for row in y..y + bh {
        for col in x..x + bw {
            mask[[row, col]] = 255;
        }
    }
    mask
}

#[test]
fn test_empty_mask_has_no_contours() {
    let mask = Array2::<u8>::zeros((10, 10));
    assert!(external_contours(&mask).is_empty());
}

#[test]
fn test_single_block_bounds() {
    let mask = mask_with_block(10, 10, 2, 3, 3, 4);
    let contours = external_contours(&mask);
    assert_eq!(
        contours,
        vec![Bounds {
            x: 3,
            y: 2,
            width: 4,
            height: 3
        }]
    );
}

#[test]
fn test_two_blobs_in_scan_order() {
    let mut mask = mask_with_block(12, 12, 1, 1, 2, 2);
    for row in 8..11 {
        for col in 6..10 {
            mask[[row, col]] = 255;
        }
    }

    let contours = external_contours(&mask);
    assert_eq!(contours.len(), 2);
    assert_eq!(contours[0], Bounds { x: 1, y: 1, width: 2, height: 2 });
    assert_eq!(contours[1], Bounds { x: 6, y: 8, width: 4, height: 3 });
}

#[test]
fn test_diagonal_touch_is_one_component() {
    let mut mask = Array2::<u8>::zeros((6, 6));
    mask[[1, 1]] = 255;
    mask[[2, 2]] = 255;

    let contours = external_contours(&mask);
    assert_eq!(
        contours,
        vec![Bounds {
            x: 1,
            y: 1,
            width: 2,
            height: 2
        }]
    );
}

#[test]
fn test_hole_is_excluded_from_contours() {
    // A ring: filled 5x5 block with its center knocked out.
    let mut mask = mask_with_block(9, 9, 2, 2, 5, 5);
    mask[[4, 4]] = 0;

    let contours = external_contours(&mask);
    assert_eq!(
        contours,
        vec![Bounds {
            x: 2,
            y: 2,
            width: 5,
            height: 5
        }]
    );
}

#[test]
fn test_merging_branches_resolve_to_one_component() {
    // Two vertical arms joined at the bottom: labeled separately on the
    // way down, merged by union-find at the join row.
    let mut mask = Array2::<u8>::zeros((6, 8));
    for row in 0..5 {
        mask[[row, 1]] = 255;
        mask[[row, 6]] = 255;
    }
    for col in 1..7 {
        mask[[5, col]] = 255;
    }

    let contours = external_contours(&mask);
    assert_eq!(
        contours,
        vec![Bounds {
            x: 1,
            y: 0,
            width: 6,
            height: 6
        }]
    );
}
