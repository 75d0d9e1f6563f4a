//! Picture inventory integration tests.
//!
//! Tests verify:
//! - Only files with a listed extension are reported, in filename order
//! - Dimensions are reported as HEIGHTxWIDTH
//! - Unreadable files yield an error line instead of aborting the listing

use std::fs;

use image::ImageFormat;

use personal_site::report::{found_images, inventory_line};
use personal_site::{ImageInventory, InventoryError};

use super::test_utils::{gradient_rgb, write_gray_png, write_rgb};

#[test]
fn test_missing_directory_is_error() {
    let root = tempfile::tempdir().unwrap();
    let inventory = ImageInventory::new(root.path().join("pictures"));

    let err = inventory.entries().err().unwrap();
    assert!(matches!(err, InventoryError::DirectoryNotFound(_)));
}

#[test]
fn test_file_path_is_not_a_directory() {
    let root = tempfile::tempdir().unwrap();
    let file = root.path().join("photo.jpg");
    write_rgb(root.path(), "photo.jpg", &gradient_rgb(4, 4), ImageFormat::Jpeg);

    assert!(matches!(
        ImageInventory::new(&file).scan(),
        Err(InventoryError::DirectoryNotFound(_))
    ));
}

#[test]
fn test_empty_directory_reports_zero() {
    let root = tempfile::tempdir().unwrap();
    let inventory = ImageInventory::new(root.path());

    let entries = inventory.entries().unwrap();
    assert_eq!(entries.len(), 0);
    assert_eq!(
        found_images(entries.len(), inventory.dir()),
        format!("Found 0 images in '{}'", root.path().display())
    );
}

#[test]
fn test_lines_in_filename_order() {
    let root = tempfile::tempdir().unwrap();
    let dir = root.path();

    write_rgb(dir, "b_landscape.jpg", &gradient_rgb(64, 32), ImageFormat::Jpeg);
    write_rgb(dir, "a_portrait.PNG", &gradient_rgb(20, 30), ImageFormat::Png);
    write_gray_png(dir, "c_gray.png", 8, 8);
    write_rgb(dir, "d_bitmap.bmp", &gradient_rgb(5, 7), ImageFormat::Bmp);
    write_rgb(dir, "e_mixed.Jpg", &gradient_rgb(5, 5), ImageFormat::Jpeg);
    fs::write(dir.join("notes.md"), "# pictures").unwrap();
    fs::create_dir(dir.join("nested.png")).unwrap();

    let lines: Vec<String> = ImageInventory::new(dir)
        .entries()
        .unwrap()
        .map(|entry| inventory_line(&entry))
        .collect();

    assert_eq!(
        lines,
        vec![
            "a_portrait.PNG 30x20",
            "b_landscape.jpg 32x64",
            "c_gray.png 8x8",
            "d_bitmap.bmp 7x5",
        ]
    );
}

#[test]
fn test_unreadable_file_reports_error() {
    let root = tempfile::tempdir().unwrap();
    let dir = root.path();

    fs::write(dir.join("corrupt.jpg"), b"\xFF\xD8 truncated").unwrap();
    write_rgb(dir, "fine.jpg", &gradient_rgb(10, 6), ImageFormat::Jpeg);

    let entries: Vec<_> = ImageInventory::new(dir).entries().unwrap().collect();
    assert_eq!(entries.len(), 2);

    let corrupt = inventory_line(&entries[0]);
    assert!(corrupt.starts_with("corrupt.jpg ERROR: "), "{}", corrupt);
    assert_eq!(inventory_line(&entries[1]), "fine.jpg 6x10");
}

#[test]
fn test_listing_reflects_directory_changes() {
    let root = tempfile::tempdir().unwrap();
    let dir = root.path();
    let inventory = ImageInventory::new(dir);

    write_rgb(dir, "one.png", &gradient_rgb(3, 3), ImageFormat::Png);
    assert_eq!(inventory.entries().unwrap().len(), 1);

    write_rgb(dir, "two.png", &gradient_rgb(3, 3), ImageFormat::Png);
    fs::remove_file(dir.join("one.png")).unwrap();

    let names: Vec<String> = inventory.entries().unwrap().map(|e| e.name).collect();
    assert_eq!(names, vec!["two.png"]);
}
