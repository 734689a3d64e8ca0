mod common;

use slicediff_core::io::scan::list_filtered;

fn names(paths: &[std::path::PathBuf]) -> Vec<String> {
    paths
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect()
}

#[test]
fn test_lexicographic_order() {
    let dir = tempfile::tempdir().unwrap();
    let img = common::solid_image(8, 8, [10, 10, 10]);
    // Deliberately created out of order.
    common::write_set(dir.path(), &["b.png", "a.png", "c.png"], &img);

    let files = list_filtered(dir.path(), "png").unwrap();
    assert_eq!(names(&files), vec!["a.png", "b.png", "c.png"]);
}

#[test]
fn test_substring_filter_is_not_an_extension_check() {
    let dir = tempfile::tempdir().unwrap();
    let img = common::solid_image(8, 8, [10, 10, 10]);
    common::write_set(dir.path(), &["slice1.png", "slice2.png"], &img);
    std::fs::write(dir.path().join("notes.txt"), b"not an image").unwrap();

    let files = list_filtered(dir.path(), "png").unwrap();
    assert_eq!(names(&files), vec!["slice1.png", "slice2.png"]);

    // The token matches anywhere in the filename, not just the suffix.
    let files = list_filtered(dir.path(), "slice").unwrap();
    assert_eq!(files.len(), 2);

    let files = list_filtered(dir.path(), "notes").unwrap();
    assert_eq!(names(&files), vec!["notes.txt"]);
}

#[test]
fn test_filter_is_case_sensitive() {
    let dir = tempfile::tempdir().unwrap();
    let img = common::solid_image(8, 8, [10, 10, 10]);
    common::write_set(dir.path(), &["upper.PNG", "lower.png"], &img);

    let files = list_filtered(dir.path(), "png").unwrap();
    assert_eq!(names(&files), vec!["lower.png"]);
}

#[test]
fn test_directories_are_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let img = common::solid_image(8, 8, [10, 10, 10]);
    common::write_set(dir.path(), &["real.png"], &img);
    std::fs::create_dir(dir.path().join("fake.png")).unwrap();

    let files = list_filtered(dir.path(), "png").unwrap();
    assert_eq!(names(&files), vec!["real.png"]);
}

#[test]
fn test_missing_directory_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(list_filtered(&dir.path().join("absent"), "png").is_err());
}
