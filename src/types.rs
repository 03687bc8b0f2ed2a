/// The type for a raw 8-bit sample, one per channel per position.
pub type Pixel = u8;

/// The type for a coded transmission symbol. Only the low 10 bits carry the
/// TMDS code word; bits 10-15 are always zero.
pub type Symbol = u16;

/// The running DC balance of a channel: cumulative (ones - zeros) emitted
/// since the start of the current scanline. Reset to 0 at the start of every
/// line, independently per channel.
pub type Balance = i32;
