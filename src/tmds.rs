mod bits;
mod blanking;
mod coder;
mod error;
mod frame;
mod source;
mod table;

pub use bits::*;
pub use blanking::*;
pub use coder::*;
pub use error::*;
pub use frame::*;
pub use source::*;
pub use table::*;

use crate::types::Symbol;

/// Control period code for (C1,C0)=(0,0). Also used as the idle fill for the
/// two channels that don't carry the blanking pattern.
pub const CTL_00: Symbol = 0b1101010100;

/// Control period code for (C1,C0)=(0,1), sent during the top/bottom porch
/// strips of the blanking interval.
pub const CTL_01: Symbol = 0b0010101011;

/// Control period code for (C1,C0)=(1,0), sent during the left/right porch
/// strips alongside active scanlines.
pub const CTL_10: Symbol = 0b0101010100;

/// Control period code for (C1,C0)=(1,1), the guard band directly framing
/// active video.
pub const CTL_11: Symbol = 0b1010101011;

/// Neutral fill for unblanked and passthrough frames. Fixed protocol constant,
/// carried over verbatim from the reference signal source.
pub const UNCODED_FILL: Symbol = 0b0011111111;
