/// Pack pixels into bytes, eight per byte, most significant bit first.
/// A final partial byte is zero-padded in its low-order bits.
pub(crate) fn pack_bits(bits: &[bool]) -> Vec<u8> {
    let mut bytes = vec![0u8; (bits.len() + 7) / 8];
    for (i, &on) in bits.iter().enumerate() {
        if on {
            bytes[i / 8] |= 0x80 >> (i % 8);
        }
    }
    bytes
}

/// Expand bytes into pixels, most significant bit first.
pub(crate) fn expand_bits(bytes: &[u8]) -> Vec<bool> {
    let mut bits = Vec::with_capacity(bytes.len() * 8);
    for &byte in bytes {
        for bit in 0..8 {
            bits.push(byte & (0x80 >> bit) != 0);
        }
    }
    bits
}
