//! The streaming source: serves an encoded frame one scanline at a time, per
//! channel, with loop-forever or one-shot semantics.

use log::{debug, info};

use super::error::TmdsError;
use super::frame::{CodedFrame, FrameEncoder, PixelImage};
use crate::types::Symbol;

/// How the source encodes and terminates. The wire numbers (1-4) match the
/// mode select exposed to the flowgraph configuration.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SourceMode {
    /// TMDS-coded output, wrapping back to the first line forever.
    EncodedLoop = 1,
    /// Raw passthrough output, wrapping forever.
    PassthroughLoop = 2,
    /// TMDS-coded output, ending after the last line.
    EncodedOnce = 3,
    /// Raw passthrough output, ending after the last line.
    PassthroughOnce = 4,
}

impl SourceMode {
    /// Whether this mode TMDS-codes the image (as opposed to passing raw
    /// sample values through).
    pub fn is_encoded(self) -> bool {
        matches!(self, SourceMode::EncodedLoop | SourceMode::EncodedOnce)
    }

    /// Whether this mode ends after one full frame.
    pub fn is_one_shot(self) -> bool {
        matches!(self, SourceMode::EncodedOnce | SourceMode::PassthroughOnce)
    }
}

impl TryFrom<u8> for SourceMode {
    type Error = TmdsError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(SourceMode::EncodedLoop),
            2 => Ok(SourceMode::PassthroughLoop),
            3 => Ok(SourceMode::EncodedOnce),
            4 => Ok(SourceMode::PassthroughOnce),
            other => Err(TmdsError::BadMode(other)),
        }
    }
}

/// One scanline of the frame, one slice of symbols per channel, each exactly
/// the frame width long.
pub struct ScanLine<'a> {
    pub red: &'a [Symbol],
    pub green: &'a [Symbol],
    pub blue: &'a [Symbol],
}

/// Serves a fully encoded frame line by line.
pub struct TmdsSource {
    frame: CodedFrame,
    mode: SourceMode,
    line: usize,
}

impl TmdsSource {
    /// Encode (or pass through) an image according to the mode and get a
    /// source positioned at the first line. Fails fast on unsupported
    /// resolutions or malformed images, before any line is served.
    pub fn new(image: &PixelImage, mode: SourceMode) -> Result<Self, TmdsError> {
        let encoder = FrameEncoder::new();
        let frame = if mode.is_encoded() {
            let frame = encoder.encode(image, true)?;
            info!("TMDS encoding ready");
            frame
        } else {
            encoder.passthrough(image)?
        };

        Ok(Self::from_frame(frame, mode))
    }

    /// Wrap a frame encoded elsewhere.
    pub fn from_frame(frame: CodedFrame, mode: SourceMode) -> Self {
        Self {
            frame,
            mode,
            line: 0,
        }
    }

    /// Width of every served line, in symbols per channel.
    pub fn width(&self) -> usize {
        self.frame.width()
    }

    /// Number of lines in the frame.
    pub fn height(&self) -> usize {
        self.frame.height()
    }

    /// Index of the next line to be served.
    pub fn line_index(&self) -> usize {
        self.line
    }

    /// Serve the next scanline and advance the cursor.
    ///
    /// Loop modes wrap to the first line at the end of the frame and never
    /// return `None`. One-shot modes return `None` once every line has been
    /// served; that is the normal end-of-stream signal, not a failure.
    pub fn fetch_line(&mut self) -> Option<ScanLine<'_>> {
        if self.line >= self.frame.height() {
            if self.mode.is_one_shot() {
                debug!("last image line transmitted");
                return None;
            }
            self.line = 0;
        }

        let y = self.line;
        self.line += 1;

        Some(ScanLine {
            red: self.frame.row(0, y),
            green: self.frame.row(1, y),
            blue: self.frame.row(2, y),
        })
    }
}
