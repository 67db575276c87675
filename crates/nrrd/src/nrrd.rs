//! Data types for the NRRD container subset

// vtools modules
use crate::error::{Error, Result};
use vtools_utils::{f, ByteExt};

// external crates
use ndarray::Array3;

/// In-memory representation of a supported NRRD volume
///
/// Only the subset produced by this toolkit is modelled: `float` samples,
/// exactly 3 dimensions, little-endian payload. The `sizes` field keeps the
/// ndarray `(z, y, x)` shape; the fastest-axis-first order required by the
/// header is handled at the read/write boundary.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Nrrd {
    /// Volume shape in `(z, y, x)` order
    pub sizes: [usize; 3],
    /// Payload encoding used on disk
    pub encoding: Encoding,
    /// Samples in C order, x fastest
    pub data: Vec<f32>,
}

impl Nrrd {
    /// Build a container from a 3D volume with the default encoding
    ///
    /// The array is read in logical order, so views and permuted arrays
    /// serialise the way they index.
    ///
    /// ```rust
    /// # use vtools_nrrd::Nrrd;
    /// # use ndarray::Array3;
    /// let volume = Array3::<f32>::zeros((17, 256, 256));
    /// let nrrd = Nrrd::from_array(&volume);
    ///
    /// assert_eq!(nrrd.sizes, [17, 256, 256]);
    /// ```
    pub fn from_array(array: &Array3<f32>) -> Self {
        let (z, y, x) = array.dim();
        Self {
            sizes: [z, y, x],
            encoding: Encoding::default(),
            data: array.iter().copied().collect(),
        }
    }

    /// Rebuild the 3D volume from the container
    ///
    /// Fails with [Error::UnexpectedDataLength] if the payload does not
    /// match the header sizes, which can only happen for hand-built values.
    pub fn into_array(self) -> Result<Array3<f32>> {
        let expected = self.number_of_samples();
        let found = self.data.len();
        let [z, y, x] = self.sizes;
        Array3::from_shape_vec((z, y, x), self.data)
            .map_err(|_| Error::UnexpectedDataLength { expected, found })
    }

    /// Total number of samples promised by the sizes
    ///
    /// Saturating, so a nonsense header fails the payload length check
    /// instead of overflowing.
    pub fn number_of_samples(&self) -> usize {
        self.sizes
            .iter()
            .fold(1_usize, |acc, &size| acc.saturating_mul(size))
    }
}

impl std::fmt::Display for Nrrd {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut s = "Nrrd {\n".to_string();
        s += &f!(
            "    sizes: {}x{}x{} (z,y,x)\n",
            self.sizes[0],
            self.sizes[1],
            self.sizes[2]
        );
        s += &f!("    encoding: {}\n", self.encoding);
        s += &f!(
            "    samples: {} ({} raw)\n}}",
            self.number_of_samples(),
            ((self.number_of_samples() * std::mem::size_of::<f32>()) as u64).display_size()
        );
        write!(f, "{}", s)
    }
}

/// Payload encodings within the supported NRRD subset
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// Little-endian `f32` samples written directly
    Raw,
    /// The raw payload compressed with gzip
    #[default]
    Gzip,
}

impl Encoding {
    /// Decode a header `encoding` field value
    ///
    /// ```rust
    /// # use vtools_nrrd::Encoding;
    /// assert_eq!(Encoding::from_field("raw").unwrap(), Encoding::Raw);
    /// assert!(Encoding::from_field("hex").is_err());
    /// ```
    pub fn from_field(value: &str) -> Result<Self> {
        match value {
            "raw" => Ok(Self::Raw),
            "gzip" | "gz" => Ok(Self::Gzip),
            _ => Err(Error::UnsupportedEncoding(value.to_string())),
        }
    }
}

impl std::fmt::Display for Encoding {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Raw => write!(f, "raw"),
            Self::Gzip => write!(f, "gzip"),
        }
    }
}
