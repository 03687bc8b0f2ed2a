//! Precomputed TMDS coding table for the per-pixel hot path.

use super::coder::encode_pixel_delta;
use crate::types::{Balance, Pixel, Symbol};

/// Lookup table mapping every (byte, balance sign) pair to its coded symbol
/// and balance delta.
///
/// The direct coder only examines the sign of the running balance, so coding
/// each byte once at the three representative balances -1, 0 and +1 captures
/// its behaviour for every reachable balance. Built once, immutable, shared
/// read-only by all encoding calls.
pub struct TmdsTable {
    codes: [[Symbol; 3]; 256],
    deltas: [[i8; 3]; 256],
}

impl TmdsTable {
    /// Build the table by running the coder over all 256 byte values at each
    /// of the three balance states.
    pub fn new() -> Self {
        let mut codes = [[0; 3]; 256];
        let mut deltas = [[0; 3]; 256];

        for byte in 0..=255u8 {
            for (state, balance) in [-1, 0, 1].into_iter().enumerate() {
                let (code, delta) = encode_pixel_delta(byte, balance);
                codes[byte as usize][state] = code;
                deltas[byte as usize][state] = delta as i8;
            }
        }

        Self { codes, deltas }
    }

    /// Code one pixel via table lookup. Bit-identical to
    /// [`encode_pixel`](super::encode_pixel) for every balance value.
    pub fn encode(&self, pix: Pixel, balance: Balance) -> (Symbol, Balance) {
        let state = (balance.signum() + 1) as usize;
        let code = self.codes[pix as usize][state];
        let delta = self.deltas[pix as usize][state];
        (code, balance + Balance::from(delta))
    }
}

impl Default for TmdsTable {
    fn default() -> Self {
        Self::new()
    }
}
