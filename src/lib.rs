//! # LibRawFont: Raw Bitmap Font Atlas Codec
//!
//! A Rust library for packing textual bitmaps into raw bit-packed font
//! atlases and rendering those atlases back as ASCII art.
//!
//! ## Features
//!
//! - **Compact packing**: Turn `0`/`1` bitmap text into MSB-first packed bytes
//! - **ASCII rendering**: Draw a whole atlas as a bordered character grid
//! - **Filename metadata**: Read cell dimensions from the `font_<W>x<H>.raw` convention
//! - **Structured access**: Pull individual cell bitmaps out of an atlas
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use librawfont::render_raw_file;
//!
//! let grid = render_raw_file("fonts/font_10x25.raw")?;
//! print!("{grid}");
//! # Ok(())
//! # }
//! ```
//!
//! Packing works on plain text, with spaces and newlines as free formatting:
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use librawfont::to_raw_bytes;
//!
//! // Nine pixel characters: eight survive, the trailing one is dropped.
//! let bytes = to_raw_bytes("1111 0000 1")?;
//! assert_eq!(bytes, vec![0xF0]);
//! # Ok(())
//! # }
//! ```
//!
//! ## Atlas Layout
//!
//! A raw atlas holds six pages of eight cells each. Pages are stored one
//! after another; within a page, cells are interleaved by scanline, so each
//! row strip carries one row of all eight cells before the next row begins.
//! The payload is exactly `width * height * 6` bytes.
//!
//! ## Error Handling
//!
//! All fallible operations return `Result<T, RawFontError>` with structured
//! error information such as the offending line of a textual bitmap or the
//! expected and actual payload sizes of an atlas.

mod encoder;
mod models;
mod renderer;
mod utils;

pub use crate::encoder::{classify_char, to_raw_bytes};
pub use crate::models::*;
pub use crate::renderer::{atlas_cells, to_ascii_grid};

use std::path::Path;

impl AtlasDimensions {
    /// Extract atlas dimensions from the file name component of `path`.
    ///
    /// Errors:
    /// - `InvalidFilename` when the path has no UTF-8 file name or the name
    ///   does not match `font_<WIDTH>x<HEIGHT>.raw`
    /// - `ZeroDimensions` when either dimension is `0`
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, RawFontError> {
        let path = path.as_ref();
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| RawFontError::InvalidFilename {
                name: path.display().to_string(),
            })?;
        Self::from_file_name(name)
    }
}

/// Read a raw atlas file and render it as an ASCII-art grid, taking the
/// cell dimensions from the file name.
///
/// Errors:
/// - `InvalidFilename` when the name does not match `font_<WIDTH>x<HEIGHT>.raw`
/// - `ZeroDimensions` when either dimension is `0`
/// - `Io` when the file cannot be read
/// - `InsufficientData` when the file is shorter than the atlas payload
pub fn render_raw_file<P: AsRef<Path>>(path: P) -> Result<String, RawFontError> {
    let dims = AtlasDimensions::from_path(&path)?;
    let bytes = std::fs::read(path)?;
    to_ascii_grid(&bytes, dims)
}
