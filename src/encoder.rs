use crate::models::{CharClass, RawFontError};
use crate::utils::pack_bits;

/// Classifies a single character of textual bitmap input.
pub fn classify_char(c: char) -> CharClass {
    match c {
        '0' => CharClass::Pixel(false),
        '1' => CharClass::Pixel(true),
        ' ' | '\n' => CharClass::Separator,
        _ => CharClass::Invalid,
    }
}

/// Pack a textual bitmap into raw atlas bytes.
///
/// `'1'` is a set pixel and `'0'` a clear one; spaces and newlines are
/// formatting only and contribute nothing. Any other character fails with
/// `InvalidCharacter` (reporting its line) and no output is produced.
///
/// The last pixel character of the input is always dropped before packing,
/// and the final byte is zero-padded up to the byte boundary, so `N` pixel
/// characters yield `ceil((N-1)/8)` bytes. Every shipped `.raw` atlas was
/// packed with this drop in place, so inputs carry one trailing sacrificial
/// bit; whether the drop was ever intentional is an open question, but
/// changing it now would break bit-compatibility with existing files.
pub fn to_raw_bytes(text: &str) -> Result<Vec<u8>, RawFontError> {
    let mut bits: Vec<bool> = Vec::with_capacity(text.len());
    let mut line = 1;
    for c in text.chars() {
        match classify_char(c) {
            CharClass::Pixel(on) => bits.push(on),
            CharClass::Separator => {
                if c == '\n' {
                    line += 1;
                }
            }
            CharClass::Invalid => {
                return Err(RawFontError::InvalidCharacter {
                    line,
                    char_found: c,
                });
            }
        }
    }

    // The final pixel never reaches the output; shipped atlases bake this in.
    bits.pop();
    Ok(pack_bits(&bits))
}
