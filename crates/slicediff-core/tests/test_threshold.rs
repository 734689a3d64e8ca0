use ndarray::Array2;

use slicediff_core::diff::threshold::{otsu_level, threshold_inv};

fn bimodal(h: usize, w: usize, low: u8, high: u8) -> Array2<u8> {
    Array2::from_shape_fn((h, w), |(r, _)| if r < h / 2 { low } else { high })
}

#[test]
fn test_otsu_separates_bimodal_classes() {
    let data = bimodal(8, 8, 10, 200);
    let level = otsu_level(&data);
    assert!(
        (10..200).contains(&level),
        "level {level} should fall between the two modes"
    );
}

#[test]
fn test_mask_contains_only_binary_values() {
    let data = bimodal(8, 8, 10, 200);
    let mask = threshold_inv(&data, otsu_level(&data));
    for &v in mask.iter() {
        assert!(v == 0 || v == 255, "mask value {v} is not binary");
    }
}

#[test]
fn test_inverted_semantics() {
    let data = bimodal(8, 8, 10, 200);
    let mask = threshold_inv(&data, 100);
    // Dark half (at or below the cutoff) becomes foreground.
    assert_eq!(mask[[0, 0]], 255);
    assert_eq!(mask[[7, 0]], 0);
}

#[test]
fn test_level_boundary_is_inclusive() {
    let data = Array2::<u8>::from_elem((4, 4), 100);
    let mask = threshold_inv(&data, 100);
    assert!(mask.iter().all(|&v| v == 255));

    let mask = threshold_inv(&data, 99);
    assert!(mask.iter().all(|&v| v == 0));
}
