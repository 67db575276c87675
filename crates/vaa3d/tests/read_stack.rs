//! Integration tests for reading Vaa3D raw stacks
//!
//! Stack files are synthesised in a scratch directory rather than shipped as
//! binary fixtures, which also keeps the byte-level layout visible in the
//! tests themselves.

use std::fs;
use std::path::PathBuf;

use rstest::rstest;
use tempfile::TempDir;
use vtools_vaa3d::{read_vaa3d_file, DataType, Error};

const MAGIC: &[u8; 24] = b"raw_image_stack_by_hpeng";

/// Assemble a stack file byte-for-byte in the declared endianness
fn stack_bytes(flag: u8, code: u16, extents: [u32; 4], payload: &[u8]) -> Vec<u8> {
    let big = flag == b'B';
    let mut bytes = Vec::new();
    bytes.extend_from_slice(MAGIC);
    bytes.push(flag);
    bytes.extend_from_slice(&if big { code.to_be_bytes() } else { code.to_le_bytes() });
    for extent in extents {
        bytes.extend_from_slice(&if big {
            extent.to_be_bytes()
        } else {
            extent.to_le_bytes()
        });
    }
    bytes.extend_from_slice(payload);
    bytes
}

fn write_stack(dir: &TempDir, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, bytes).unwrap();
    path
}

#[test]
fn little_endian_u16_stack() {
    let dir = TempDir::new().unwrap();
    // x=2, y=3, z=2, c=2 => 24 samples, values equal to their file order
    let payload: Vec<u8> = (0..24u16).flat_map(|v| v.to_le_bytes()).collect();
    let path = write_stack(&dir, "le.raw", &stack_bytes(b'L', 2, [2, 3, 2, 2], &payload));

    let stack = read_vaa3d_file(&path).unwrap();
    assert_eq!(stack.datatype, DataType::U16);
    assert_eq!(stack.shape(), [2, 2, 3, 2]);
    assert_eq!(stack.number_of_samples(), 24);
    let expected: Vec<f32> = (0..24).map(|v| v as f32).collect();
    assert_eq!(stack.data, expected);
}

#[test]
fn big_endian_f32_stack() {
    let dir = TempDir::new().unwrap();
    let values = [0.0f32, 0.5, -1.25, 3.0, 100.0, 6.5e-3];
    let payload: Vec<u8> = values.iter().flat_map(|v| v.to_be_bytes()).collect();
    let path = write_stack(&dir, "be.raw", &stack_bytes(b'B', 4, [3, 2, 1, 1], &payload));

    let stack = read_vaa3d_file(&path).unwrap();
    assert_eq!(stack.datatype, DataType::F32);
    assert_eq!(stack.shape(), [1, 1, 2, 3]);
    assert_eq!(stack.data, values);
}

#[test]
fn u8_samples_convert_to_floats() {
    let dir = TempDir::new().unwrap();
    let payload = [0u8, 1, 127, 255];
    let path = write_stack(&dir, "u8.raw", &stack_bytes(b'L', 1, [2, 2, 1, 1], &payload));

    let stack = read_vaa3d_file(&path).unwrap();
    assert_eq!(stack.data, vec![0.0, 1.0, 127.0, 255.0]);
}

#[test]
fn channels_split_the_payload() {
    let dir = TempDir::new().unwrap();
    let payload: Vec<u8> = (0..12u8).collect();
    let path = write_stack(&dir, "c2.raw", &stack_bytes(b'L', 1, [3, 2, 1, 2], &payload));

    let stack = read_vaa3d_file(&path).unwrap();
    let channels = stack.channels();
    assert_eq!(channels.len(), 2);
    assert_eq!(channels[0], [0.0, 1.0, 2.0, 3.0, 4.0, 5.0]);
    assert_eq!(channels[1], [6.0, 7.0, 8.0, 9.0, 10.0, 11.0]);
}

#[test]
fn rejects_unrecognised_magic() {
    let dir = TempDir::new().unwrap();
    let mut bytes = stack_bytes(b'L', 1, [1, 1, 1, 1], &[0]);
    bytes[0..3].copy_from_slice(b"not");
    let path = write_stack(&dir, "magic.raw", &bytes);

    let result = read_vaa3d_file(&path);
    assert!(matches!(result, Err(Error::UnrecognisedMagic)));
}

#[test]
fn rejects_unknown_endianness_flag() {
    let dir = TempDir::new().unwrap();
    let mut bytes = stack_bytes(b'L', 1, [1, 1, 1, 1], &[0]);
    bytes[24] = b'X';
    let path = write_stack(&dir, "flag.raw", &bytes);

    let result = read_vaa3d_file(&path);
    assert!(matches!(result, Err(Error::UnknownEndianness('X'))));
}

#[rstest]
#[case(0)]
#[case(3)]
#[case(8)]
fn rejects_undocumented_datatype_codes(#[case] code: u16) {
    let dir = TempDir::new().unwrap();
    let path = write_stack(
        &dir,
        "code.raw",
        &stack_bytes(b'L', code, [1, 1, 1, 1], &[0]),
    );

    let result = read_vaa3d_file(&path);
    assert!(matches!(result, Err(Error::UnsupportedDataType(c)) if c == code));
}

#[test]
fn rejects_truncated_payload() {
    let dir = TempDir::new().unwrap();
    // header promises 2x2x1x1 u16 samples (8 bytes) but only 4 arrive
    let payload: Vec<u8> = (0..4u8).collect();
    let path = write_stack(&dir, "short.raw", &stack_bytes(b'L', 2, [2, 2, 1, 1], &payload));

    let result = read_vaa3d_file(&path);
    assert!(matches!(
        result,
        Err(Error::UnexpectedByteLength {
            expected: 51,
            found: 47,
        })
    ));
}
