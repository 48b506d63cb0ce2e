use std::fs;
use std::io;

use shedit::{EditableFile, FixedPath, TempFile};
use tempfile::tempdir;

#[test]
fn temp_setup_writes_content() {
    let dir = tempdir().expect("tempdir");
    let file = TempFile::new().dir(dir.path()).content("Hello, Rustaceans!");

    let path = file.setup().expect("setup");

    assert_eq!(fs::read_to_string(&path).expect("read"), "Hello, Rustaceans!");
    assert_eq!(path.parent(), Some(dir.path()));
}

#[test]
fn temp_setup_creates_distinct_files() {
    let dir = tempdir().expect("tempdir");
    let file = TempFile::new().dir(dir.path()).pattern("same.*");

    let first = file.setup().expect("first setup");
    let second = file.setup().expect("second setup");

    assert_ne!(first, second);
    assert!(first.exists() && second.exists());
}

#[test]
fn temp_pattern_places_random_part_at_last_star() {
    let dir = tempdir().expect("tempdir");

    let path = TempFile::new()
        .dir(dir.path())
        .pattern("commit.*.md")
        .setup()
        .expect("setup");
    let name = path.file_name().expect("file name").to_string_lossy().to_string();
    assert!(name.starts_with("commit."), "{name}");
    assert!(name.ends_with(".md"), "{name}");
    assert!(name.len() > "commit..md".len(), "{name}");

    let path = TempFile::new()
        .dir(dir.path())
        .pattern("notes")
        .setup()
        .expect("setup");
    let name = path.file_name().expect("file name").to_string_lossy().to_string();
    assert!(name.starts_with("notes"), "{name}");
    assert!(name.len() > "notes".len(), "{name}");
}

#[test]
fn temp_setup_fails_in_missing_directory() {
    let dir = tempdir().expect("tempdir");
    let file = TempFile::new().dir(dir.path().join("missing"));

    let error = file.setup().expect_err("missing dir");

    assert_eq!(error.kind(), io::ErrorKind::NotFound);
}

#[test]
fn temp_cleanup_removes_file() {
    let dir = tempdir().expect("tempdir");
    let file = TempFile::new().dir(dir.path());
    let path = file.setup().expect("setup");

    file.cleanup(&path);
    assert!(!path.exists(), "{} was not removed", path.display());

    file.cleanup(&path);
    assert!(!path.exists());
}

#[test]
fn fixed_path_hands_out_its_path_and_removes_it() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("EDITME");
    fs::write(&path, "draft").expect("write");
    let file = FixedPath::new(&path);

    assert_eq!(file.setup().expect("setup"), path);
    assert!(path.exists());

    file.cleanup(&path);
    assert!(!path.exists());
}

#[test]
fn fixed_path_setup_does_not_touch_the_filesystem() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("not-yet-created");

    assert_eq!(FixedPath::new(&path).setup().expect("setup"), path);
    assert!(!path.exists());
}
