//! Errors raised while validating encoder inputs.

/// Errors thrown when setting up a frame for encoding or streaming.
///
/// Once inputs pass validation, encoding itself is total and cannot fail;
/// end-of-stream in the one-shot source modes is signalled separately and is
/// not an error.
#[derive(Debug, Eq, PartialEq)]
pub enum TmdsError {
    /// The active resolution is not on the supported mode whitelist, so the
    /// blanking geometry is undefined.
    UnsupportedResolution {
        /// Active width of the rejected image.
        width: usize,
        /// Active height of the rejected image.
        height: usize,
    },
    /// The image has a channel count other than 1 (grayscale) or 3 (RGB).
    BadChannelCount(usize),
    /// The pixel data length does not match width * height * channels.
    BadImageShape {
        /// Expected data length.
        expected: usize,
        /// Actual data length.
        actual: usize,
    },
    /// The source mode number is not one of the four defined modes.
    BadMode(u8),
}

impl std::fmt::Display for TmdsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TmdsError::UnsupportedResolution { width, height } => {
                write!(f, "unsupported active resolution {}x{}", width, height)
            }
            TmdsError::BadChannelCount(channels) => {
                write!(f, "image must have 1 or 3 channels, got {}", channels)
            }
            TmdsError::BadImageShape { expected, actual } => {
                write!(
                    f,
                    "pixel data length {} does not match image shape (expected {})",
                    actual, expected
                )
            }
            TmdsError::BadMode(mode) => {
                write!(f, "unknown source mode {} (expected 1-4)", mode)
            }
        }
    }
}

impl std::error::Error for TmdsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}
