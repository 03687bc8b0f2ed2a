//! The per-pixel TMDS coder: minimum-transition chaining followed by DC
//! balancing, as a pure function over (pixel, running balance).

use super::bits::{from_bits, to_bits8};
use crate::types::{Balance, Pixel, Symbol};

/// Code one 8-bit pixel into a 10-bit TMDS symbol.
///
/// `balance` is the channel's running (ones - zeros) count at the start of
/// this pixel; the returned balance includes this symbol's contribution.
/// Total function: no input can fail.
pub fn encode_pixel(pix: Pixel, balance: Balance) -> (Symbol, Balance) {
    let (code, delta) = encode_pixel_delta(pix, balance);
    (code, balance + delta)
}

/// Core of the coder, returning the balance delta contributed by the symbol
/// instead of the accumulated balance. Only the *sign* of `balance` is ever
/// examined, which is what makes the (byte, sign) lookup table exact.
pub(crate) fn encode_pixel_delta(pix: Pixel, balance: Balance) -> (Symbol, i32) {
    let d = to_bits8(pix);
    let ones_d = d.iter().filter(|&&bit| bit).count() as i32;

    // Minimum-transition stage: XNOR-chain the bits when the byte is
    // ones-heavy, XOR-chain otherwise. q[8] records which chain was used.
    let mut q = [false; 10];
    q[0] = d[0];
    if ones_d > 4 || (ones_d == 4 && !d[0]) {
        for k in 1..8 {
            q[k] = !(q[k - 1] ^ d[k]);
        }
        q[8] = false;
    } else {
        for k in 1..8 {
            q[k] = q[k - 1] ^ d[k];
        }
        q[8] = true;
    }

    let n1 = q[..8].iter().filter(|&&bit| bit).count() as i32;
    let n0 = 8 - n1;

    // DC-balancing stage: invert the data bits (signalled by q[9]) or keep
    // them, whichever drives the running balance back toward zero.
    let delta;
    if balance == 0 || n1 == 4 {
        q[9] = !q[8];
        if q[8] {
            delta = n1 - n0;
        } else {
            for bit in q[..8].iter_mut() {
                *bit = !*bit;
            }
            delta = n0 - n1;
        }
    } else if (balance > 0 && n1 > 4) || (balance < 0 && n1 < 4) {
        q[9] = true;
        for bit in q[..8].iter_mut() {
            *bit = !*bit;
        }
        delta = 2 * i32::from(q[8]) + n0 - n1;
    } else {
        q[9] = false;
        delta = -2 * i32::from(!q[8]) + n1 - n0;
    }

    (from_bits(&q) as Symbol, delta)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Reference vectors generated from the original signal-source model.
    #[test]
    fn test_known_vectors_balanced() {
        assert_eq!(encode_pixel(0x00, 0), (0b0100000000, -8));
        assert_eq!(encode_pixel(0xFF, 0), (0b1000000000, -8));
        assert_eq!(encode_pixel(0x10, 0), (0b0111110000, 0));
        assert_eq!(encode_pixel(0x80, 0), (0b0110000000, -6));
        assert_eq!(encode_pixel(0x55, 0), (0b0100110011, 0));
        assert_eq!(encode_pixel(0xAA, 0), (0b1000110011, 0));
        assert_eq!(encode_pixel(0x01, 0), (0b0111111111, 8));
        assert_eq!(encode_pixel(0xFE, 0), (0b1011111111, 8));
        assert_eq!(encode_pixel(0x7F, 0), (0b1010000000, -6));
    }

    #[test]
    fn test_known_vectors_unbalanced() {
        assert_eq!(encode_pixel(0x00, 5), (0b0100000000, -3));
        assert_eq!(encode_pixel(0x00, -5), (0b1111111111, 5));
        assert_eq!(encode_pixel(0xFF, 5), (0b1000000000, -3));
        assert_eq!(encode_pixel(0xFF, -5), (0b0011111111, 1));
        assert_eq!(encode_pixel(0xC3, 1), (0b0101000001, -3));
        assert_eq!(encode_pixel(0x3C, -1), (0b0010111110, 1));
    }

    #[test]
    fn test_already_balanced_bytes_stay_neutral() {
        // Bytes whose minimum-transition word has four ones contribute no
        // net balance no matter the starting count.
        for balance in [-3, 0, 3] {
            assert_eq!(encode_pixel(0x55, balance).1, balance);
            assert_eq!(encode_pixel(0x10, balance).1, balance);
        }
    }

    #[test]
    fn test_code_fits_ten_bits() {
        for pix in 0..=255u8 {
            for balance in [-2, 0, 2] {
                let (code, _) = encode_pixel(pix, balance);
                assert!(code < 1 << 10, "pix {pix:#04x} produced code {code:#06x}");
            }
        }
    }

    #[test]
    fn test_constant_line_balance_stays_bounded() {
        // DC-balance property: a full line of a single value must not let
        // the running count drift.
        for value in [0x00u8, 0xFF] {
            let mut balance = 0;
            for _ in 0..800 {
                let (_, next) = encode_pixel(value, balance);
                balance = next;
                assert!(balance.abs() <= 8, "value {value:#04x} drifted to {balance}");
            }
        }
    }

    #[test]
    fn test_constant_line_alternates_inversions() {
        // A run of 0x00 alternates between the two complementary codings.
        let mut balance = 0;
        let mut codes = Vec::new();
        for _ in 0..6 {
            let (code, next) = encode_pixel(0x00, balance);
            codes.push(code);
            balance = next;
        }
        assert_eq!(
            codes,
            [
                0b0100000000,
                0b1111111111,
                0b0100000000,
                0b1111111111,
                0b0100000000,
                0b1111111111
            ]
        );
    }
}
