//! Data types for decoded Vaa3D stacks

// vtools modules
use crate::error::{Error, Result};
use vtools_utils::{f, ByteExt};

/// Representation of a decoded Vaa3D raw image stack
///
/// The header carries the four extents as [Dimensions] and the on-disk
/// sample type as a [DataType]. The payload is stored as a flat `f32`
/// vector in `(c, z, y, x)` order with `x` the fastest axis, which is the
/// order the samples appear in the file.
///
/// ```text
/// <24-byte magic "raw_image_stack_by_hpeng">
/// <endianness flag> <datatype code>
/// <x> <y> <z> <c>
/// <sample 0,0,0,0> <sample 0,0,0,1> ... x fastest
/// ```
#[derive(Debug, Default)]
pub struct Stack {
    /// The four extents given in the file header
    pub dimensions: Dimensions,
    /// Sample type the file was stored as
    pub datatype: DataType,
    /// All samples converted to `f32`, x fastest
    pub data: Vec<f32>,
}

impl Stack {
    /// Shape of the stack in `(c, z, y, x)` order
    ///
    /// This matches the array layout returned by the original `v3dpy`
    /// loaders, so a 4D array built from [Stack::data] with this shape
    /// indexes the same way.
    pub fn shape(&self) -> [usize; 4] {
        self.dimensions.shape()
    }

    /// Total number of samples expected from the header
    pub fn number_of_samples(&self) -> usize {
        self.dimensions.number_of_samples()
    }

    /// Vector of per-channel sample slices
    ///
    /// Common when channels are processed independently.
    pub fn channels(&self) -> Vec<&[f32]> {
        self.data
            .chunks_exact(self.dimensions.samples_per_channel())
            .collect()
    }
}

impl std::fmt::Display for Stack {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut s = "Stack {\n".to_string();
        s += &f!("    extents: {}\n", self.dimensions);
        s += &f!(
            "    samples: {} ({} on disk)\n",
            self.number_of_samples(),
            self.datatype
        );
        s += &f!(
            "    payload: {}\n}}",
            (self.dimensions.payload_byte_length(self.datatype) as u64).display_size()
        );
        write!(f, "{}", s)
    }
}

/// Extent values in the Vaa3D file header
///
/// Stores the four u32 extents exactly as they appear in the header, in
/// `x, y, z, c` order. `c` is the channel count; single-channel stacks
/// still carry `c = 1` rather than dropping the axis.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    /// Samples along x (fastest axis in the payload)
    pub x: u32,
    /// Samples along y
    pub y: u32,
    /// Number of z slices
    pub z: u32,
    /// Number of channels
    pub c: u32,
}

impl Dimensions {
    /// Shape in `(c, z, y, x)` order
    pub fn shape(&self) -> [usize; 4] {
        [
            self.c as usize,
            self.z as usize,
            self.y as usize,
            self.x as usize,
        ]
    }

    /// Total number of samples expected in the payload
    ///
    /// Saturating, so a nonsense header fails the file length check instead
    /// of overflowing.
    pub fn number_of_samples(&self) -> usize {
        self.shape()
            .iter()
            .fold(1_usize, |acc, &extent| acc.saturating_mul(extent))
    }

    /// Number of samples in a single channel volume
    pub fn samples_per_channel(&self) -> usize {
        (self.x as usize) * (self.y as usize) * (self.z as usize)
    }

    /// Expected payload size in bytes for a given sample type
    pub fn payload_byte_length(&self, datatype: DataType) -> usize {
        self.number_of_samples()
            .saturating_mul(datatype.bytes_per_sample())
    }
}

impl std::fmt::Display for Dimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}x{}x{}x{} (x,y,z,c)", self.x, self.y, self.z, self.c)
    }
}

/// Sample datatype codes documented for the Vaa3D raw format
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum DataType {
    /// Code 1, unsigned 8-bit samples
    #[default]
    U8,
    /// Code 2, unsigned 16-bit samples
    U16,
    /// Code 4, 32-bit float samples
    F32,
}

impl DataType {
    /// Decode the u16 header code into a sample type
    ///
    /// ```rust
    /// # use vtools_vaa3d::DataType;
    /// assert_eq!(DataType::from_code(2).unwrap(), DataType::U16);
    /// assert!(DataType::from_code(3).is_err());
    /// ```
    pub fn from_code(code: u16) -> Result<Self> {
        match code {
            1 => Ok(Self::U8),
            2 => Ok(Self::U16),
            4 => Ok(Self::F32),
            _ => Err(Error::UnsupportedDataType(code)),
        }
    }

    /// Width of a single sample on disk
    pub const fn bytes_per_sample(&self) -> usize {
        match self {
            Self::U8 => 1,
            Self::U16 => 2,
            Self::F32 => 4,
        }
    }
}

impl std::fmt::Display for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::U8 => write!(f, "u8"),
            Self::U16 => write!(f, "u16"),
            Self::F32 => write!(f, "f32"),
        }
    }
}
