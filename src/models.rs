use regex::Regex;
use std::sync::OnceLock;

/// Number of pages in a complete atlas file.
pub const PAGE_COUNT: usize = 6;

/// Number of cells interleaved in each row-strip.
pub const CELLS_PER_STRIP: usize = 8;

// For font_<WIDTH>x<HEIGHT>.raw
static RE_RAW_FILENAME_LOCK: OnceLock<Regex> = OnceLock::new();
fn get_re_raw_filename() -> &'static Regex {
    RE_RAW_FILENAME_LOCK.get_or_init(|| Regex::new(r"^font_([0-9]+)x([0-9]+)\.raw$").unwrap())
}

/// Cell dimensions of an atlas, carried by the file name rather than the
/// file contents.
///
/// An atlas holds 48 cells of `width × height` pixels each, so the four
/// layout counts below fully describe where every pixel lives. Both the
/// packer and the renderer take their slicing from here so the two sides
/// cannot drift apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AtlasDimensions {
    pub width: u32,
    pub height: u32,
}

impl AtlasDimensions {
    /// Extract dimensions from a bare file name following the
    /// `font_<WIDTH>x<HEIGHT>.raw` convention.
    ///
    /// Errors:
    /// - Name does not match the pattern (or a value overflows) => InvalidFilename
    /// - A matching name with a zero dimension => ZeroDimensions
    pub fn from_file_name(name: &str) -> Result<Self, RawFontError> {
        let invalid = || RawFontError::InvalidFilename {
            name: name.to_string(),
        };
        let caps = get_re_raw_filename().captures(name).ok_or_else(invalid)?;
        let width: u32 = caps
            .get(1)
            .unwrap()
            .as_str()
            .parse()
            .map_err(|_| invalid())?;
        let height: u32 = caps
            .get(2)
            .unwrap()
            .as_str()
            .parse()
            .map_err(|_| invalid())?;
        if width == 0 || height == 0 {
            return Err(RawFontError::ZeroDimensions { width, height });
        }
        Ok(AtlasDimensions { width, height })
    }

    /// Size of a complete atlas payload in bytes: `width * height * 6`,
    /// saturating at `usize::MAX` when the product does not fit. No
    /// in-memory buffer can reach a saturated size, so size guards built on
    /// this count always fail for such dimensions.
    pub fn payload_byte_count(&self) -> usize {
        (self.width as usize)
            .saturating_mul(self.height as usize)
            .saturating_mul(PAGE_COUNT)
    }

    /// Bits in one page: `height` row-strips of 8 interleaved cells.
    pub fn page_bit_count(&self) -> usize {
        (self.width as usize)
            .saturating_mul(self.height as usize)
            .saturating_mul(CELLS_PER_STRIP)
    }

    /// Bits in one row-strip: one scanline across 8 cells.
    pub fn row_strip_bit_count(&self) -> usize {
        (self.width as usize).saturating_mul(CELLS_PER_STRIP)
    }

    /// Bits one cell contributes to a row-strip.
    pub fn cell_bit_count(&self) -> usize {
        self.width as usize
    }
}

/// Pixel grid of a single atlas cell.
///
/// Pixels are stored row-by-row, `true` for set pixels and `false` for
/// clear ones.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Bitmap {
    pub pixels: Vec<Vec<bool>>,
    pub width: usize,
    pub height: usize,
}

impl std::fmt::Display for Bitmap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in &self.pixels {
            for &pixel in row {
                write!(f, "{}", if pixel { '#' } else { ' ' })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Classification of one character of textual bitmap input, evaluated once
/// per character by the packer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// `'1'` (set) or `'0'` (clear): contributes one pixel.
    Pixel(bool),
    /// Space or newline: pure formatting, contributes nothing.
    Separator,
    /// Any other character: rejected.
    Invalid,
}

#[derive(Debug)]
pub enum RawFontError {
    Io(std::io::Error),
    InvalidCharacter {
        line: usize,
        char_found: char,
    },
    InsufficientData {
        expected: usize,
        actual: usize,
    },
    InvalidFilename {
        name: String,
    },
    ZeroDimensions {
        width: u32,
        height: u32,
    },
}

impl std::fmt::Display for RawFontError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RawFontError::Io(err) => write!(f, "IO error: {err}"),
            RawFontError::InvalidCharacter { line, char_found } => {
                write!(f, "Invalid input character '{char_found}' at line {line}")
            }
            RawFontError::InsufficientData { expected, actual } => {
                write!(
                    f,
                    "Insufficient data: atlas payload needs {expected} bytes, got {actual}"
                )
            }
            RawFontError::InvalidFilename { name } => {
                write!(
                    f,
                    "File name '{name}' does not match the font_<WIDTH>x<HEIGHT>.raw pattern"
                )
            }
            RawFontError::ZeroDimensions { width, height } => {
                write!(f, "Zero dimensions ({width}x{height}) are not allowed")
            }
        }
    }
}

impl std::error::Error for RawFontError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RawFontError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for RawFontError {
    fn from(err: std::io::Error) -> Self {
        RawFontError::Io(err)
    }
}
