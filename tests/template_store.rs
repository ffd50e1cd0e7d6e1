#![cfg(feature = "image-io")]

use gestmatch::{GestMatchError, TemplateStore};
use std::fs;
use std::path::Path;

fn write_gray_png(path: &Path, width: u32, height: u32, seed: u8) {
    let data: Vec<u8> = (0..width * height)
        .map(|i| (i as u8).wrapping_mul(31).wrapping_add(seed))
        .collect();
    image::GrayImage::from_raw(width, height, data)
        .unwrap()
        .save(path)
        .unwrap();
}

#[test]
fn load_orders_gestures_by_folder_name() {
    let dir = tempfile::tempdir().unwrap();

    // Created out of order on purpose.
    for name in ["wave", "fist", "palm"] {
        let folder = dir.path().join(name);
        fs::create_dir(&folder).unwrap();
        write_gray_png(&folder.join("gesture.png"), 8, 8, name.len() as u8);
    }

    let store = TemplateStore::load(dir.path()).unwrap();
    let labels: Vec<_> = store.iter().map(|t| t.label().to_string()).collect();
    assert_eq!(labels, ["fist", "palm", "wave"]);
}

#[test]
fn load_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    for (name, seed) in [("fist", 3u8), ("palm", 9)] {
        let folder = dir.path().join(name);
        fs::create_dir(&folder).unwrap();
        write_gray_png(&folder.join("ref.png"), 12, 10, seed);
    }

    let first = TemplateStore::load(dir.path()).unwrap();
    let second = TemplateStore::load(dir.path()).unwrap();

    assert_eq!(first.len(), second.len());
    for (a, b) in first.iter().zip(second.iter()) {
        assert_eq!(a.label(), b.label());
        assert_eq!(a.width(), b.width());
        assert_eq!(a.height(), b.height());
        assert_eq!(a.view().as_slice(), b.view().as_slice());
    }
}

#[test]
fn load_picks_the_first_file_in_lexicographic_order() {
    let dir = tempfile::tempdir().unwrap();
    let folder = dir.path().join("palm");
    fs::create_dir(&folder).unwrap();
    write_gray_png(&folder.join("z_later.png"), 6, 6, 200);
    write_gray_png(&folder.join("a_first.png"), 6, 6, 50);

    let store = TemplateStore::load(dir.path()).unwrap();
    assert_eq!(store.len(), 1);

    let expected: Vec<u8> = (0..36u32)
        .map(|i| (i as u8).wrapping_mul(31).wrapping_add(50))
        .collect();
    assert_eq!(store.get(0).unwrap().view().as_slice(), expected.as_slice());
}

#[test]
fn empty_gesture_folder_is_a_fatal_load_error() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("fist")).unwrap();

    let err = TemplateStore::load(dir.path()).err().unwrap();
    assert!(matches!(err, GestMatchError::TemplateLoad { .. }));
}

#[test]
fn unreadable_image_is_a_fatal_load_error() {
    let dir = tempfile::tempdir().unwrap();
    let folder = dir.path().join("palm");
    fs::create_dir(&folder).unwrap();
    fs::write(folder.join("broken.png"), b"not a png").unwrap();

    let err = TemplateStore::load(dir.path()).err().unwrap();
    assert!(matches!(err, GestMatchError::TemplateLoad { .. }));
}

#[test]
fn missing_directory_is_a_fatal_load_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("no_such_dir");
    let err = TemplateStore::load(&missing).err().unwrap();
    assert!(matches!(err, GestMatchError::TemplateLoad { .. }));
}
