//! Integration tests for the volume pipeline
//!
//! Input stacks are synthesised per test so the expected values are visible
//! next to the assertions.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use ndarray::{Array3, Array4, ArrayD};
use rstest::rstest;
use tempfile::TempDir;
use tiff::encoder::{colortype, TiffEncoder};
use vtools_nrrd::{read_nrrd, write_nrrd, Nrrd};
use vtools_volume::{project_max, read_volume, resample, Error, Format};

/// Write a 16-bit grayscale stack, one page per z slice, returning the samples
fn write_tiff_stack(path: &Path, pages: usize, width: u32, height: u32) -> Vec<u16> {
    let mut encoder = TiffEncoder::new(File::create(path).unwrap()).unwrap();
    let mut samples = Vec::new();
    for page in 0..pages {
        let slice: Vec<u16> = (0..(width * height) as usize)
            .map(|i| (page * 1000 + i) as u16)
            .collect();
        encoder
            .write_image::<colortype::Gray16>(width, height, &slice)
            .unwrap();
        samples.extend_from_slice(&slice);
    }
    samples
}

/// Write a little-endian Vaa3D raw stack with u8 samples 0, 1, 2, ...
#[cfg(feature = "vaa3d")]
fn write_vaa3d_stack(path: &Path, extents: [u32; 4]) -> usize {
    let count = extents.iter().product::<u32>() as usize;
    let mut bytes = Vec::new();
    bytes.extend_from_slice(b"raw_image_stack_by_hpeng");
    bytes.push(b'L');
    bytes.extend_from_slice(&1u16.to_le_bytes());
    for extent in extents {
        bytes.extend_from_slice(&extent.to_le_bytes());
    }
    bytes.extend((0..count).map(|v| v as u8));
    fs::write(path, bytes).unwrap();
    count
}

fn scratch_file(dir: &TempDir, name: &str) -> PathBuf {
    dir.path().join(name)
}

#[test]
fn reads_multipage_tiff_stacks() {
    let dir = TempDir::new().unwrap();
    let path = scratch_file(&dir, "stack.tif");
    let samples = write_tiff_stack(&path, 3, 4, 5);

    let stack = read_volume(&path).unwrap();
    assert_eq!(stack.shape(), [3, 5, 4]);
    let expected: Vec<f32> = samples.iter().map(|&s| s as f32).collect();
    assert_eq!(stack.iter().copied().collect::<Vec<f32>>(), expected);
}

#[test]
fn single_page_tiff_fails_the_shape_check() {
    let dir = TempDir::new().unwrap();
    let path = scratch_file(&dir, "flat.tif");
    write_tiff_stack(&path, 1, 4, 5);

    let result = read_volume(&path);
    assert!(matches!(result, Err(Error::ShapeMismatch { shape }) if shape == vec![5, 4]));
}

#[test]
fn rejects_mixed_page_dimensions() {
    let dir = TempDir::new().unwrap();
    let path = scratch_file(&dir, "mixed.tif");
    let mut encoder = TiffEncoder::new(File::create(&path).unwrap()).unwrap();
    encoder
        .write_image::<colortype::Gray16>(4, 5, &vec![0u16; 20])
        .unwrap();
    encoder
        .write_image::<colortype::Gray16>(3, 3, &vec![0u16; 9])
        .unwrap();

    let result = read_volume(&path);
    assert!(matches!(
        result,
        Err(Error::InconsistentPages {
            expected: (4, 5),
            found: (3, 3),
        })
    ));
}

#[test]
fn rejects_colour_stacks() {
    let dir = TempDir::new().unwrap();
    let path = scratch_file(&dir, "colour.tif");
    let mut encoder = TiffEncoder::new(File::create(&path).unwrap()).unwrap();
    encoder
        .write_image::<colortype::RGB8>(2, 2, &vec![0u8; 12])
        .unwrap();

    let result = read_volume(&path);
    assert!(matches!(result, Err(Error::UnsupportedColorType(_))));
}

#[rstest]
#[case("stack.xyz", "xyz")]
#[case("stack.nii", "nii")]
#[case("noextension", "")]
fn rejects_unrecognised_extensions(#[case] name: &str, #[case] extension: &str) {
    let dir = TempDir::new().unwrap();
    let path = scratch_file(&dir, name);
    fs::write(&path, b"irrelevant").unwrap();

    let result = read_volume(&path);
    assert!(matches!(result, Err(Error::UnsupportedFormat(e)) if e == extension));
}

#[test]
fn format_dispatch_is_case_insensitive() {
    assert_eq!(Format::from_path("a.TIFF").unwrap(), Format::Tiff);
    assert_eq!(Format::from_path("a.Raw").unwrap(), Format::Vaa3dRaw);
    assert!(Format::Tiff.is_available());
}

#[cfg(feature = "vaa3d")]
#[test]
fn reads_vaa3d_stacks_through_the_dispatch() {
    let dir = TempDir::new().unwrap();
    let path = scratch_file(&dir, "stack.raw");
    // two channels of 2x2x2, the second strictly larger everywhere
    write_vaa3d_stack(&path, [2, 2, 2, 2]);

    assert!(Format::Vaa3dRaw.is_available());
    let stack = read_volume(&path).unwrap();
    assert_eq!(stack.shape(), [2, 2, 2, 2]);

    let volume = project_max(stack).unwrap();
    assert_eq!(volume.dim(), (2, 2, 2));
    let expected: Vec<f32> = (8..16).map(|v| v as f32).collect();
    assert_eq!(volume.iter().copied().collect::<Vec<f32>>(), expected);
}

#[test]
fn projection_takes_the_elementwise_maximum() {
    let stack = Array4::from_shape_fn((3, 2, 2, 2), |(c, z, y, x)| {
        ((c * 7 + z * 4 + y * 2 + x) % 5) as f32
    });

    let volume = project_max(stack.clone().into_dyn()).unwrap();
    assert_eq!(volume.dim(), (2, 2, 2));

    for z in 0..2 {
        for y in 0..2 {
            for x in 0..2 {
                let expected = (0..3)
                    .map(|c| stack[[c, z, y, x]])
                    .fold(f32::NEG_INFINITY, f32::max);
                assert_eq!(volume[[z, y, x]], expected);
            }
        }
    }
}

#[test]
fn projection_passes_3d_volumes_through() {
    let volume = Array3::from_shape_fn((2, 3, 4), |(z, y, x)| (z + y + x) as f32);
    let projected = project_max(volume.clone().into_dyn()).unwrap();
    assert_eq!(projected, volume);
}

#[test]
fn projection_rejects_deeper_stacks() {
    let stack = ArrayD::<f32>::zeros(vec![2, 2, 2, 2, 2]);
    let result = project_max(stack);
    assert!(matches!(result, Err(Error::TooManyDimensions { found: 5 })));
}

#[test]
fn unit_scale_is_the_identity() {
    let volume = Array3::from_shape_fn((4, 5, 6), |(z, y, x)| (z * 100 + y * 10 + x) as f32);
    let same = resample(volume.clone(), 1.0).unwrap();
    assert_eq!(same, volume);
}

#[rstest]
#[case(0.5)]
#[case(0.33)]
#[case(1.5)]
#[case(2.0)]
fn scaled_extents_round_per_axis(#[case] scale: f64) {
    let volume = Array3::<f32>::zeros((10, 20, 7));
    let scaled = resample(volume, scale).unwrap();

    let expected = |n: usize| (((n as f64) * scale).round() as usize).max(1);
    assert_eq!(scaled.dim(), (expected(10), expected(20), expected(7)));
}

#[test]
fn constant_volumes_stay_constant() {
    let volume = Array3::from_elem((4, 4, 4), 7.5f32);
    let scaled = resample(volume, 1.6).unwrap();
    assert!(scaled.iter().all(|&v| v == 7.5));
}

#[test]
fn interpolation_preserves_ramp_endpoints() {
    let volume = Array3::from_shape_fn((1, 1, 11), |(_, _, x)| x as f32);
    let scaled = resample(volume, 2.0).unwrap();

    assert_eq!(scaled.dim(), (2, 2, 22));
    assert_eq!(scaled[[0, 0, 0]], 0.0);
    assert_eq!(scaled[[0, 0, 21]], 10.0);
    // endpoint alignment keeps the blend monotonic along the ramp
    for x in 1..22 {
        assert!(scaled[[0, 0, x]] >= scaled[[0, 0, x - 1]]);
    }
}

#[rstest]
#[case(0.0)]
#[case(-0.5)]
#[case(f64::NAN)]
fn rejects_non_positive_scales(#[case] scale: f64) {
    let volume = Array3::<f32>::zeros((2, 2, 2));
    let result = resample(volume, scale);
    assert!(matches!(result, Err(Error::InvalidScale(_))));
}

#[test]
fn oversized_requests_fail_with_out_of_memory() {
    let volume = Array3::<f32>::zeros((10, 10, 10));
    // 300k samples per axis is petabytes of output
    let result = resample(volume, 30_000.0);
    assert!(matches!(result, Err(Error::OutOfMemory { .. })));
}

#[test]
fn full_pipeline_round_trips_through_nrrd() {
    let dir = TempDir::new().unwrap();
    let input = scratch_file(&dir, "stack.tif");
    write_tiff_stack(&input, 10, 20, 20);

    let stack = read_volume(&input).unwrap();
    let volume = project_max(stack).unwrap();
    let volume = resample(volume, 0.5).unwrap();
    assert_eq!(volume.dim(), (5, 10, 10));

    let output = dir.path().join("out").join("sub").join("vol.nrrd");
    write_nrrd(&Nrrd::from_array(&volume), &output).unwrap();

    let reloaded = read_nrrd(&output).unwrap().into_array().unwrap();
    assert_eq!(reloaded, volume);
}
