use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};

use periprec::ephemeris::{load_vectors, ParseVectorError};
use periprec::PrecessError;

fn write_export(dir: &Utf8Path, name: &str, content: &str) -> Utf8PathBuf {
    let path = dir.join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(content.as_bytes()).unwrap();
    path
}

fn tempdir_utf8() -> (tempfile::TempDir, Utf8PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).unwrap();
    (dir, path)
}

#[test]
fn test_fixture_block_yields_all_records_in_order() {
    let records = load_vectors(Utf8Path::new("tests/data/horizons_results.txt")).unwrap();

    assert_eq!(records.len(), 9);
    assert_eq!(records[0].time, 2451553.5);
    assert_eq!(records[0].date, "2000-Jan-10");
    assert_eq!(records[0].x, 0.32);
    assert_eq!(records[8].time, 2453426.5);
    assert_eq!(records[8].date, "2005-Feb-25");
}

#[test]
fn test_missing_start_sentinel_warns_and_returns_empty() {
    let (_dir, dir_path) = tempdir_utf8();
    let path = write_export(
        &dir_path,
        "no_soe.txt",
        "header only\n2451553.5, A.D. 2000-Jan-10 00:00:00.0000, 1.0, 0.0, 0.0,\n",
    );

    let records = load_vectors(&path).unwrap();
    assert!(records.is_empty());
}

#[test]
fn test_scan_stops_at_end_sentinel() {
    let (_dir, dir_path) = tempdir_utf8();
    let path = write_export(
        &dir_path,
        "trailing.txt",
        "$$SOE\n\
         2451553.5, A.D. 2000-Jan-10 00:00:00.0000, 1.0, 0.0, 0.0,\n\
         $$EOE\n\
         this trailing material is not part of the block\n",
    );

    let records = load_vectors(&path).unwrap();
    assert_eq!(records.len(), 1);
}

#[test]
fn test_malformed_interior_line_aborts() {
    let (_dir, dir_path) = tempdir_utf8();
    let path = write_export(
        &dir_path,
        "malformed.txt",
        "$$SOE\n\
         2451553.5, A.D. 2000-Jan-10 00:00:00.0000, 1.0, zz, 0.0,\n\
         $$EOE\n",
    );

    let result = load_vectors(&path);
    assert!(matches!(
        result,
        Err(PrecessError::EphemerisParsing(
            ParseVectorError::InvalidCoordinate(_)
        ))
    ));
}

#[test]
fn test_missing_file_is_an_io_error() {
    let result = load_vectors(Utf8Path::new("tests/data/does_not_exist.txt"));
    assert!(matches!(result, Err(PrecessError::IoError(_))));
}
