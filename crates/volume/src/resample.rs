//! Trilinear resampling of 3D volumes

// crate modules
use crate::error::{Error, Result};

// external crates
use log::debug;
use ndarray::Array3;

/// Resample every axis of a volume by a single scale factor
///
/// Order-1 (trilinear) interpolation with endpoint-aligned coordinates:
/// the first and last samples of each axis map onto the first and last
/// samples of the output, and everything between is linearly blended from
/// the eight surrounding corners. Each output extent is `round(n × s)`,
/// never below a single sample.
///
/// A factor of exactly 1.0 is the identity and returns the input without
/// copying:
///
/// ```rust
/// # use vtools_volume::resample;
/// # use ndarray::Array3;
/// let volume = Array3::<f32>::zeros((10, 20, 20));
/// let same = resample(volume.clone(), 1.0).unwrap();
/// assert_eq!(same, volume);
/// ```
///
/// Otherwise the output is a fresh allocation, checked up front so an
/// oversized request fails with
/// [Error::OutOfMemory](crate::Error) instead of aborting the process:
///
/// ```rust
/// # use vtools_volume::resample;
/// # use ndarray::Array3;
/// let volume = Array3::<f32>::zeros((10, 20, 20));
/// let scaled = resample(volume, 0.5).unwrap();
/// assert_eq!(scaled.dim(), (5, 10, 10));
/// ```
pub fn resample(volume: Array3<f32>, scale: f64) -> Result<Array3<f32>> {
    // the comparison also rejects NaN
    if !(scale > 0.0) {
        return Err(Error::InvalidScale(scale));
    }
    if scale == 1.0 || volume.is_empty() {
        return Ok(volume);
    }

    let (depth, height, width) = volume.dim();
    let extents = [
        scaled_extent(depth, scale),
        scaled_extent(height, scale),
        scaled_extent(width, scale),
    ];

    // checked so absurd factors surface as out-of-memory, not an overflow
    let count = extents
        .iter()
        .try_fold(1_usize, |acc, &extent| acc.checked_mul(extent))
        .ok_or(Error::OutOfMemory {
            requested: u64::MAX,
        })?;

    let mut samples: Vec<f32> = Vec::new();
    samples
        .try_reserve_exact(count)
        .map_err(|_| Error::OutOfMemory {
            requested: (count as u64).saturating_mul(std::mem::size_of::<f32>() as u64),
        })?;
    debug!(
        "resampling {depth}x{height}x{width} to {}x{}x{}",
        extents[0], extents[1], extents[2]
    );

    let steps = [
        source_step(depth, extents[0]),
        source_step(height, extents[1]),
        source_step(width, extents[2]),
    ];

    for z in 0..extents[0] {
        let sz = z as f64 * steps[0];
        for y in 0..extents[1] {
            let sy = y as f64 * steps[1];
            for x in 0..extents[2] {
                let sx = x as f64 * steps[2];
                samples.push(trilinear(&volume, sz, sy, sx));
            }
        }
    }

    // Safe to unwrap as the sample count is the product of the extents
    Ok(Array3::from_shape_vec((extents[0], extents[1], extents[2]), samples).unwrap())
}

/// Output extent for one axis, never collapsing below a single sample
fn scaled_extent(extent: usize, scale: f64) -> usize {
    ((extent as f64 * scale).round() as usize).max(1)
}

/// Source coordinate step per output index, endpoints aligned
fn source_step(input: usize, output: usize) -> f64 {
    if output > 1 {
        (input - 1) as f64 / (output - 1) as f64
    } else {
        0.0
    }
}

/// Blend the eight corners surrounding a fractional source coordinate
fn trilinear(volume: &Array3<f32>, z: f64, y: f64, x: f64) -> f32 {
    let (depth, height, width) = volume.dim();

    let z0 = z.floor() as usize;
    let y0 = y.floor() as usize;
    let x0 = x.floor() as usize;
    let z1 = (z0 + 1).min(depth - 1);
    let y1 = (y0 + 1).min(height - 1);
    let x1 = (x0 + 1).min(width - 1);

    let dz = (z - z0 as f64) as f32;
    let dy = (y - y0 as f64) as f32;
    let dx = (x - x0 as f64) as f32;
    let one_minus_dx = 1.0 - dx;

    // collapse x, then y, then z
    let c00 = volume[[z0, y0, x0]].mul_add(one_minus_dx, volume[[z0, y0, x1]] * dx);
    let c01 = volume[[z0, y1, x0]].mul_add(one_minus_dx, volume[[z0, y1, x1]] * dx);
    let c10 = volume[[z1, y0, x0]].mul_add(one_minus_dx, volume[[z1, y0, x1]] * dx);
    let c11 = volume[[z1, y1, x0]].mul_add(one_minus_dx, volume[[z1, y1, x1]] * dx);

    let c0 = c00.mul_add(1.0 - dy, c01 * dy);
    let c1 = c10.mul_add(1.0 - dy, c11 * dy);

    c0.mul_add(1.0 - dz, c1 * dz)
}
