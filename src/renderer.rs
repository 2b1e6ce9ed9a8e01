use crate::models::{AtlasDimensions, Bitmap, RawFontError, CELLS_PER_STRIP, PAGE_COUNT};
use crate::utils::expand_bits;

/// Validate the byte slice against the atlas dimensions and cut it down to
/// the exact payload.
///
/// Errors:
/// - `ZeroDimensions` when either dimension is `0`
/// - `InsufficientData` when fewer bytes than the payload needs are given
///
/// Extra bytes past the payload are accepted with a warning and ignored.
fn atlas_payload(bytes: &[u8], dims: AtlasDimensions) -> Result<&[u8], RawFontError> {
    if dims.width == 0 || dims.height == 0 {
        return Err(RawFontError::ZeroDimensions {
            width: dims.width,
            height: dims.height,
        });
    }
    let expected = dims.payload_byte_count();
    if bytes.len() < expected {
        return Err(RawFontError::InsufficientData {
            expected,
            actual: bytes.len(),
        });
    }
    if bytes.len() > expected {
        log::warn!(
            "Ignoring {} bytes after the {expected} byte atlas payload",
            bytes.len() - expected
        );
    }
    Ok(&bytes[..expected])
}

/// Render a raw atlas as an ASCII-art grid.
///
/// The output is one bordered band per page, top to bottom, with adjacent
/// bands sharing their border line. Each band holds eight cells side by
/// side, separated by `|`, one atlas row strip per text line. Set pixels
/// print as `'#'` and clear ones as `' '`.
///
/// Errors:
/// - `ZeroDimensions` when either dimension is `0`
/// - `InsufficientData` when `bytes` is shorter than the atlas payload
pub fn to_ascii_grid(bytes: &[u8], dims: AtlasDimensions) -> Result<String, RawFontError> {
    let bits = expand_bits(atlas_payload(bytes, dims)?);

    let mut grid = String::new();
    push_border(&mut grid, dims.width);
    for page in bits.chunks(dims.page_bit_count()) {
        for strip in page.chunks(dims.row_strip_bit_count()) {
            grid.push('|');
            for cell in strip.chunks(dims.cell_bit_count()) {
                for &on in cell {
                    grid.push(if on { '#' } else { ' ' });
                }
                grid.push('|');
            }
            grid.push('\n');
        }
        push_border(&mut grid, dims.width);
    }
    Ok(grid)
}

fn push_border(grid: &mut String, width: u32) {
    for _ in 0..CELLS_PER_STRIP {
        grid.push('+');
        for _ in 0..width {
            grid.push('-');
        }
    }
    grid.push_str("+\n");
}

/// Split a raw atlas into its individual cell bitmaps.
///
/// Cells are returned page by page, left to right within each page, 48 in
/// all. Rows of one cell sit a full strip apart in the payload because each
/// strip interleaves one scanline of all eight cells of its page.
///
/// Errors:
/// - `ZeroDimensions` when either dimension is `0`
/// - `InsufficientData` when `bytes` is shorter than the atlas payload
pub fn atlas_cells(bytes: &[u8], dims: AtlasDimensions) -> Result<Vec<Bitmap>, RawFontError> {
    let bits = expand_bits(atlas_payload(bytes, dims)?);
    let width = dims.width as usize;
    let height = dims.height as usize;

    let mut cells = Vec::with_capacity(PAGE_COUNT * CELLS_PER_STRIP);
    for page in 0..PAGE_COUNT {
        for cell in 0..CELLS_PER_STRIP {
            let mut pixels = Vec::with_capacity(height);
            for row in 0..height {
                let start = page * dims.page_bit_count()
                    + row * dims.row_strip_bit_count()
                    + cell * dims.cell_bit_count();
                pixels.push(bits[start..start + width].to_vec());
            }
            cells.push(Bitmap {
                pixels,
                width,
                height,
            });
        }
    }
    Ok(cells)
}
