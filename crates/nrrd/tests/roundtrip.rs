//! Integration tests for the NRRD writer/reader pair

use std::fs;

use ndarray::Array3;
use rstest::rstest;
use tempfile::TempDir;
use vtools_nrrd::{read_nrrd, write_nrrd, Encoding, Error, Nrrd};

/// Volume with a distinct value at every coordinate
fn ramp_volume(shape: (usize, usize, usize)) -> Array3<f32> {
    Array3::from_shape_fn(shape, |(z, y, x)| (z * 1000 + y * 50 + x) as f32 * 0.25)
}

#[rstest]
#[case(Encoding::Raw)]
#[case(Encoding::Gzip)]
fn round_trips_exactly(#[case] encoding: Encoding) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("volume.nrrd");

    let volume = ramp_volume((10, 20, 20));
    let mut nrrd = Nrrd::from_array(&volume);
    nrrd.encoding = encoding;
    write_nrrd(&nrrd, &path).unwrap();

    let reloaded = read_nrrd(&path).unwrap();
    assert_eq!(reloaded.encoding, encoding);
    assert_eq!(reloaded.sizes, [10, 20, 20]);
    assert_eq!(reloaded.into_array().unwrap(), volume);
}

#[test]
fn creates_missing_parent_directories() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out").join("sub").join("vol.nrrd");

    let nrrd = Nrrd::from_array(&ramp_volume((10, 20, 20)));
    write_nrrd(&nrrd, &path).unwrap();

    assert!(path.is_file());
    let reloaded = read_nrrd(&path).unwrap();
    assert_eq!(reloaded.sizes, [10, 20, 20]);
}

#[test]
fn overwrites_existing_files() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("volume.nrrd");

    write_nrrd(&Nrrd::from_array(&ramp_volume((4, 4, 4))), &path).unwrap();
    write_nrrd(&Nrrd::from_array(&ramp_volume((2, 3, 5))), &path).unwrap();

    let reloaded = read_nrrd(&path).unwrap();
    assert_eq!(reloaded.sizes, [2, 3, 5]);
}

#[test]
fn header_matches_the_documented_subset() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("volume.nrrd");

    let mut nrrd = Nrrd::from_array(&ramp_volume((10, 20, 30)));
    nrrd.encoding = Encoding::Raw;
    write_nrrd(&nrrd, &path).unwrap();

    let bytes = fs::read(&path).unwrap();
    let header_end = bytes.windows(2).position(|w| w == b"\n\n").unwrap();
    let header = String::from_utf8(bytes[..header_end].to_vec()).unwrap();

    assert!(header.starts_with("NRRD0004"));
    assert!(header.contains("type: float"));
    assert!(header.contains("dimension: 3"));
    // fastest axis first, i.e. x y z
    assert!(header.contains("sizes: 30 20 10"));
    assert!(header.contains("endian: little"));
    assert!(header.contains("encoding: raw"));
}

#[test]
fn rejects_non_nrrd_files() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("not.nrrd");
    fs::write(&path, "PGM\nsome other format\n").unwrap();

    let result = read_nrrd(&path);
    assert!(matches!(result, Err(Error::NotAnNrrd(magic)) if magic == "PGM"));
}

#[test]
fn rejects_unsupported_encodings() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("hex.nrrd");
    fs::write(
        &path,
        "NRRD0004\ntype: float\ndimension: 3\nsizes: 2 2 2\nencoding: hex\n\n",
    )
    .unwrap();

    let result = read_nrrd(&path);
    assert!(matches!(result, Err(Error::UnsupportedEncoding(e)) if e == "hex"));
}

#[test]
fn rejects_wrong_dimension() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("2d.nrrd");
    fs::write(
        &path,
        "NRRD0004\ntype: float\ndimension: 2\nsizes: 4 4\nencoding: raw\n\n",
    )
    .unwrap();

    let result = read_nrrd(&path);
    assert!(matches!(result, Err(Error::UnsupportedDimension(2))));
}

#[test]
fn rejects_short_payloads() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("short.nrrd");
    let mut bytes =
        b"NRRD0004\ntype: float\ndimension: 3\nsizes: 2 2 2\nencoding: raw\n\n".to_vec();
    // 8 samples promised, 1 provided
    bytes.extend_from_slice(&1.0f32.to_le_bytes());
    fs::write(&path, bytes).unwrap();

    let result = read_nrrd(&path);
    assert!(matches!(
        result,
        Err(Error::UnexpectedDataLength {
            expected: 8,
            found: 1,
        })
    ));
}
