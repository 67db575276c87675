//! Colormap generation and colour conversions

// crate modules
use crate::error::{Error, Result};

// external crates
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A lookup table of RGB colours with unit-range channels
///
/// Instance labels index straight into the table, so entry 0 doubles as the
/// background colour and is kept black by the generators. Channels stay as
/// `f32` in `[0, 1]` until the texture boundary, where they are quantised
/// to 8 bits.
#[derive(Debug, Clone, PartialEq)]
pub struct Colormap {
    /// RGB entries in label order
    pub entries: Vec<[f32; 3]>,
}

impl Colormap {
    /// Generate a random-hue colormap from a seeded RNG
    ///
    /// Entry 0 is black; entries `1..entries` are fully saturated, fully
    /// bright hues drawn uniformly from the colour wheel. The RNG is seeded,
    /// so the same `(entries, seed)` pair always generates the same map.
    ///
    /// ```rust
    /// # use vtools_colormap::Colormap;
    /// let colormap = Colormap::random_hue(1024, 42).unwrap();
    ///
    /// assert_eq!(colormap.len(), 1024);
    /// assert_eq!(colormap.entries[0], [0.0, 0.0, 0.0]);
    /// assert_eq!(colormap, Colormap::random_hue(1024, 42).unwrap());
    /// ```
    pub fn random_hue(entries: usize, seed: u64) -> Result<Self> {
        if entries == 0 {
            return Err(Error::Empty);
        }

        let mut rng = StdRng::seed_from_u64(seed);
        let mut table = Vec::with_capacity(entries);

        // label 0 is the background
        table.push([0.0, 0.0, 0.0]);
        for _ in 1..entries {
            table.push(hsv_to_rgb(rng.gen::<f32>(), 1.0, 1.0));
        }

        Ok(Self { entries: table })
    }

    /// Number of entries in the table
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check for the empty table
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Quantise the table to interleaved 8-bit RGB bytes
    ///
    /// ```rust
    /// # use vtools_colormap::Colormap;
    /// let colormap = Colormap { entries: vec![[0.0, 0.5, 1.0]] };
    /// assert_eq!(colormap.to_bytes(), vec![0, 128, 255]);
    /// ```
    pub fn to_bytes(&self) -> Vec<u8> {
        self.entries
            .iter()
            .flatten()
            .map(|channel| (channel * 255.0).round().clamp(0.0, 255.0) as u8)
            .collect()
    }
}

impl std::fmt::Display for Colormap {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "Colormap {{ entries: {} }}", self.len())
    }
}

/// Convert an HSV colour to RGB with unit-range channels
///
/// The hue wraps around the colour wheel, so any real value is accepted;
/// saturation and value are expected in `[0, 1]`.
///
/// ```rust
/// # use vtools_colormap::hsv_to_rgb;
/// assert_eq!(hsv_to_rgb(0.0, 1.0, 1.0), [1.0, 0.0, 0.0]);
/// assert_eq!(hsv_to_rgb(0.5, 1.0, 1.0), [0.0, 1.0, 1.0]);
/// assert_eq!(hsv_to_rgb(0.25, 0.0, 0.5), [0.5, 0.5, 0.5]);
/// ```
pub fn hsv_to_rgb(hue: f32, saturation: f32, value: f32) -> [f32; 3] {
    // wrap into [0, 1) then spread over the six sectors of the wheel
    let wheel = (hue.fract() + 1.0).fract() * 6.0;
    let sector = wheel.floor() as usize % 6;
    let offset = wheel - wheel.floor();

    let p = value * (1.0 - saturation);
    let q = value * (1.0 - saturation * offset);
    let t = value * (1.0 - saturation * (1.0 - offset));

    match sector {
        0 => [value, t, p],
        1 => [q, value, p],
        2 => [p, value, t],
        3 => [p, q, value],
        4 => [t, p, value],
        _ => [value, p, q],
    }
}
