//! LSB-first conversions between fixed-width integers and bit arrays.

/// Expand a byte into its 8 bits, least-significant bit in `[0]`.
pub fn to_bits8(value: u8) -> [bool; 8] {
    let mut bits = [false; 8];
    for (i, bit) in bits.iter_mut().enumerate() {
        *bit = (value >> i) & 1 != 0;
    }
    bits
}

/// Expand a 16-bit word into its 16 bits, least-significant bit in `[0]`.
pub fn to_bits16(value: u16) -> [bool; 16] {
    let mut bits = [false; 16];
    for (i, bit) in bits.iter_mut().enumerate() {
        *bit = (value >> i) & 1 != 0;
    }
    bits
}

/// Reconstruct an unsigned integer from an LSB-first bit slice.
/// The slice must hold at most 32 bits.
pub fn from_bits(bits: &[bool]) -> u32 {
    debug_assert!(bits.len() <= 32);

    bits.iter()
        .rev()
        .fold(0, |acc, &bit| (acc << 1) | u32::from(bit))
}
