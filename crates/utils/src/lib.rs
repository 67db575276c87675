//! Common utility extensions for the vtools crates
//!
#![doc = include_str!("../readme.md")]

// Alias for the format! macro
pub use std::format as f;

/// Extends byte counts with human-friendly size conversions
///
/// File size budgets and summaries come up in every tool that writes an
/// asset, so the conversions live here rather than being repeated per crate.
pub trait ByteExt {
    /// Size in kilobytes
    ///
    /// Plain 1000-byte kilobytes, since asset budgets are specified that way.
    ///
    /// ```rust
    /// # use vtools_utils::ByteExt;
    /// let bytes: u64 = 51_200;
    /// assert_eq!(bytes.kilobytes(), 51.2);
    /// ```
    fn kilobytes(&self) -> f64;

    /// Short human-readable size string
    ///
    /// Picks the largest unit that keeps the value above 1, with one decimal
    /// place for anything beyond bytes.
    ///
    /// ```rust
    /// # use vtools_utils::ByteExt;
    /// assert_eq!(512_u64.display_size(), "512 B");
    /// assert_eq!(2_048_u64.display_size(), "2.0 KB");
    /// assert_eq!(3_400_000_u64.display_size(), "3.4 MB");
    /// ```
    fn display_size(&self) -> String;
}

impl ByteExt for u64 {
    fn kilobytes(&self) -> f64 {
        *self as f64 / 1000.0
    }

    fn display_size(&self) -> String {
        let bytes = *self as f64;
        if bytes < 1000.0 {
            f!("{self} B")
        } else if bytes < 1e6 {
            f!("{:.1} KB", bytes / 1e3)
        } else if bytes < 1e9 {
            f!("{:.1} MB", bytes / 1e6)
        } else {
            f!("{:.1} GB", bytes / 1e9)
        }
    }
}
