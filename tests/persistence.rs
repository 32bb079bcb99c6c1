//! Integration tests for loading and saving matrix files

use std::fs;

use sparsemat::{load, load_with_config, save, Config, Error, SparseMatrix};
use tempfile::tempdir;

#[test]
fn test_load_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("a.txt");
    fs::write(&path, "rows=3\ncols=3\n(0, 0, 1)\n(1, 2, -4)\n(2, 1, 7)\n").unwrap();

    let matrix: SparseMatrix = load(&path).unwrap();

    assert_eq!(matrix.shape(), (3, 3));
    assert_eq!(matrix.nnz(), 3);
    assert_eq!(matrix.get(1, 2), -4);
}

#[test]
fn test_load_missing_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("does_not_exist.txt");

    let err = load::<i64, _>(&path).unwrap_err();
    match err {
        Error::NotFound { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_load_malformed_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.txt");
    fs::write(&path, "rows=2\ncols=2\n(0, 0, 1)\nnot a tuple\n").unwrap();

    assert!(matches!(load::<i64, _>(&path), Err(Error::Format { line: 4, .. })));
}

#[test]
fn test_load_invalid_utf8_is_format_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("binary.txt");
    fs::write(&path, b"rows=2\ncols=2\n(0, 0, \xff)\n").unwrap();

    match load::<i64, _>(&path).unwrap_err() {
        Error::Format { line, content, .. } => {
            assert_eq!(line, 3);
            assert_eq!(content, "(0, 0, ");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_load_strict_rejects_out_of_bounds() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("oob.txt");
    fs::write(&path, "rows=2\ncols=2\n(0, 5, 1)\n").unwrap();

    let lenient: SparseMatrix = load(&path).unwrap();
    assert_eq!(lenient.out_of_bounds().count(), 1);

    assert!(matches!(
        load_with_config::<i64, _>(&path, &Config::strict()),
        Err(Error::Format { line: 3, .. })
    ));
}

#[test]
fn test_save_writes_sorted_output() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out.txt");
    let matrix = SparseMatrix::from_triplets(2, 3, vec![(1, 0, 3i64), (0, 2, -1), (0, 1, 8)]);

    save(&matrix, &path).unwrap();

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "rows=2\ncols=3\n(0, 1, 8)\n(0, 2, -1)\n(1, 0, 3)\n"
    );
}

#[test]
fn test_save_then_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("roundtrip.txt");
    let matrix = SparseMatrix::from_triplets(4, 5, vec![(3, 4, 11i64), (0, 0, -2), (2, 1, 5)]);

    save(&matrix, &path).unwrap();
    let reloaded: SparseMatrix = load(&path).unwrap();

    assert_eq!(reloaded, matrix);
}

#[test]
fn test_save_overwrites_existing() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("existing.txt");
    fs::write(&path, "stale contents that are much longer than the new output\n").unwrap();

    save(&SparseMatrix::<i64>::new(1, 1), &path).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "rows=1\ncols=1\n");
}

#[test]
fn test_save_into_missing_directory() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("no_such_dir").join("out.txt");

    let err = save(&SparseMatrix::<i64>::new(1, 1), &path).unwrap_err();
    match err {
        Error::Io { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(!path.exists());
}
