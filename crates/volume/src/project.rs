//! Dimensionality reduction for stacked volumes

// crate modules
use crate::error::{Error, Result};

// external crates
use log::debug;
use ndarray::{Array3, ArrayD, Axis, Ix3};

/// Collapse a stacked volume to 3D by maximum-intensity projection
///
/// A 4D stack `(c, z, y, x)` is reduced along its first axis, keeping the
/// elementwise maximum. The reduction is lossy and one-directional; there
/// is no way back to the stack. A volume that is already 3D passes through
/// untouched.
///
/// Anything below 3 dimensions is a shape mismatch, and anything above 4
/// is rejected outright rather than projected repeatedly — a stack of
/// stacks has no meaning the writer could preserve.
///
/// ```rust
/// # use vtools_volume::project_max;
/// # use ndarray::ArrayD;
/// let stack = ArrayD::from_shape_fn(vec![2, 3, 4, 5], |i| i[0] as f32);
/// let volume = project_max(stack).unwrap();
///
/// // the second channel wins everywhere
/// assert_eq!(volume.dim(), (3, 4, 5));
/// assert!(volume.iter().all(|&v| v == 1.0));
/// ```
pub fn project_max(volume: ArrayD<f32>) -> Result<Array3<f32>> {
    match volume.ndim() {
        // Safe to unwrap as the dimensionality is checked right here
        3 => Ok(volume.into_dimensionality::<Ix3>().unwrap()),
        4 => {
            debug!(
                "collapsing {} slabs of shape {:?}",
                volume.len_of(Axis(0)),
                &volume.shape()[1..]
            );
            let projected = volume.fold_axis(Axis(0), f32::NEG_INFINITY, |&acc, &s| acc.max(s));
            Ok(projected.into_dimensionality::<Ix3>().unwrap())
        }
        n if n < 3 => Err(Error::ShapeMismatch {
            shape: volume.shape().to_vec(),
        }),
        n => Err(Error::TooManyDimensions { found: n }),
    }
}
