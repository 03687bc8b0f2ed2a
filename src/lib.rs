//! TMDS encoding of still images into HDMI-like symbol streams.
//!
//! Transition-Minimized Differential Signaling codes each 8-bit sample into a
//! 10-bit symbol, first chaining bits by XOR or XNOR to minimize transitions,
//! then optionally inverting the result to keep the running DC balance of the
//! channel near zero. This crate implements that coder, a lookup-table fast
//! path, the control-period blanking pattern around active video, and a
//! scanline-oriented source suitable for feeding a radio transmission or
//! degradation simulation back end.

mod tmds;
mod types;

pub use tmds::*;
pub use types::*;
