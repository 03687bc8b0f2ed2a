//! Frame-level encoding: validated image input, the coded frame buffer, and
//! the encoder that composes active video into the blanking interval.

use log::debug;

use super::blanking::{blanking_pattern, VideoMode};
use super::error::TmdsError;
use super::table::TmdsTable;
use crate::tmds::{CTL_00, UNCODED_FILL};
use crate::types::{Balance, Pixel, Symbol};

/// Number of output channels. Grayscale input is replicated to all three.
pub const CHANNELS: usize = 3;

/// The channel that carries the blanking control pattern; the other two are
/// filled with the idle code during blanking.
const BLANKING_CHANNEL: usize = 2;

/// A validated raw image: row-major 8-bit samples with 1 (grayscale) or
/// 3 (RGB) interleaved channels.
#[derive(Debug)]
pub struct PixelImage {
    width: usize,
    height: usize,
    channels: usize,
    data: Vec<Pixel>,
}

impl PixelImage {
    /// Wrap raw pixel data, rejecting malformed shapes up front.
    pub fn from_raw(
        width: usize,
        height: usize,
        channels: usize,
        data: Vec<Pixel>,
    ) -> Result<Self, TmdsError> {
        if channels != 1 && channels != CHANNELS {
            return Err(TmdsError::BadChannelCount(channels));
        }
        let expected = width * height * channels;
        if data.len() != expected {
            return Err(TmdsError::BadImageShape {
                expected,
                actual: data.len(),
            });
        }

        Ok(Self {
            width,
            height,
            channels,
            data,
        })
    }

    /// Convert a decoded image. Grayscale stays single-channel; everything
    /// else (including alpha formats) collapses to RGB.
    pub fn from_dynamic(img: &image::DynamicImage) -> Self {
        match img {
            image::DynamicImage::ImageLuma8(gray) => Self {
                width: gray.width() as usize,
                height: gray.height() as usize,
                channels: 1,
                data: gray.as_raw().clone(),
            },
            other => {
                let rgb = other.to_rgb8();
                Self {
                    width: rgb.width() as usize,
                    height: rgb.height() as usize,
                    channels: CHANNELS,
                    data: rgb.into_raw(),
                }
            }
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Sample one channel at (x, y), replicating grayscale across channels.
    fn sample(&self, x: usize, y: usize, channel: usize) -> Pixel {
        let c = if self.channels == 1 { 0 } else { channel };
        self.data[(y * self.width + x) * self.channels + c]
    }
}

/// A coded frame: three planar channels of symbols at either total (blanked)
/// or active resolution. Immutable once handed to the streaming source.
#[derive(Debug)]
pub struct CodedFrame {
    width: usize,
    height: usize,
    planes: [Vec<Symbol>; CHANNELS],
}

impl CodedFrame {
    fn filled(width: usize, height: usize, fill: Symbol) -> Self {
        Self {
            width,
            height,
            planes: [
                vec![fill; width * height],
                vec![fill; width * height],
                vec![fill; width * height],
            ],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// One scanline of one channel.
    pub fn row(&self, channel: usize, y: usize) -> &[Symbol] {
        &self.planes[channel][y * self.width..(y + 1) * self.width]
    }
}

/// Encodes raw images into coded frames, reusing one lookup table across
/// frames.
pub struct FrameEncoder {
    table: TmdsTable,
}

impl FrameEncoder {
    pub fn new() -> Self {
        Self {
            table: TmdsTable::new(),
        }
    }

    /// TMDS-encode an image.
    ///
    /// With `blanking` the output is sized to the total resolution of the
    /// image's video mode: two channels idle at [`CTL_00`], the third carries
    /// the control pattern, and the coded active video lands in the
    /// bottom-right active block. An active resolution outside the mode
    /// whitelist fails before any encoding work. Without `blanking` the
    /// output matches the input size exactly and any resolution is accepted.
    pub fn encode(&self, image: &PixelImage, blanking: bool) -> Result<CodedFrame, TmdsError> {
        if blanking {
            let mode = Self::mode_for(image)?;
            let mut frame = CodedFrame::filled(mode.h_total, mode.v_total, CTL_00);
            frame.planes[BLANKING_CHANNEL] = blanking_pattern(mode);
            self.encode_active(image, &mut frame, mode.h_blank(), mode.v_blank());
            debug!(
                "encoded {}x{} active into {}x{} total",
                image.width, image.height, mode.h_total, mode.v_total
            );
            Ok(frame)
        } else {
            let mut frame = CodedFrame::filled(image.width, image.height, UNCODED_FILL);
            self.encode_active(image, &mut frame, 0, 0);
            Ok(frame)
        }
    }

    /// Compose an image without TMDS coding: raw sample values widened to
    /// symbols, centered in the total resolution over a neutral fill.
    pub fn passthrough(&self, image: &PixelImage) -> Result<CodedFrame, TmdsError> {
        let mode = Self::mode_for(image)?;
        let mut frame = CodedFrame::filled(mode.h_total, mode.v_total, UNCODED_FILL);
        let x_off = mode.h_blank() / 2;
        let y_off = mode.v_blank() / 2;

        for channel in 0..CHANNELS {
            for y in 0..image.height {
                let row = (y + y_off) * frame.width + x_off;
                for x in 0..image.width {
                    frame.planes[channel][row + x] = Symbol::from(image.sample(x, y, channel));
                }
            }
        }

        Ok(frame)
    }

    fn mode_for(image: &PixelImage) -> Result<&'static VideoMode, TmdsError> {
        VideoMode::for_active(image.width, image.height).ok_or(TmdsError::UnsupportedResolution {
            width: image.width,
            height: image.height,
        })
    }

    /// Code every pixel of every channel into the frame at the given offset.
    /// The balance counter restarts at zero for each scanline of each channel
    /// and never carries across rows or channels.
    fn encode_active(&self, image: &PixelImage, frame: &mut CodedFrame, x_off: usize, y_off: usize) {
        for (channel, plane) in frame.planes.iter_mut().enumerate() {
            for y in 0..image.height {
                let row = (y + y_off) * frame.width + x_off;
                let mut balance: Balance = 0;
                for x in 0..image.width {
                    let (code, next) = self.table.encode(image.sample(x, y, channel), balance);
                    plane[row + x] = code;
                    balance = next;
                }
            }
        }
    }
}

impl Default for FrameEncoder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tmds::encode_pixel;
    use rand::{Rng, SeedableRng};

    fn gray(width: usize, height: usize, value: u8) -> PixelImage {
        PixelImage::from_raw(width, height, 1, vec![value; width * height]).unwrap()
    }

    #[test]
    fn test_rejects_bad_shapes() {
        assert_eq!(
            PixelImage::from_raw(2, 2, 2, vec![0; 8]).unwrap_err(),
            TmdsError::BadChannelCount(2)
        );
        assert_eq!(
            PixelImage::from_raw(2, 2, 3, vec![0; 11]).unwrap_err(),
            TmdsError::BadImageShape {
                expected: 12,
                actual: 11
            }
        );
    }

    #[test]
    fn test_blanking_requires_known_mode() {
        let encoder = FrameEncoder::new();
        let image = gray(100, 100, 0);
        assert_eq!(
            encoder.encode(&image, true).unwrap_err(),
            TmdsError::UnsupportedResolution {
                width: 100,
                height: 100
            }
        );
        assert_eq!(
            encoder.passthrough(&image).unwrap_err(),
            TmdsError::UnsupportedResolution {
                width: 100,
                height: 100
            }
        );
    }

    #[test]
    fn test_single_pixel_unblanked() {
        let encoder = FrameEncoder::new();
        let frame = encoder.encode(&gray(1, 1, 0x42), false).unwrap();
        let (expected, _) = encode_pixel(0x42, 0);

        assert_eq!(frame.width(), 1);
        assert_eq!(frame.height(), 1);
        for channel in 0..CHANNELS {
            assert_eq!(frame.row(channel, 0), &[expected]);
        }
    }

    #[test]
    fn test_grayscale_replicates_channels() {
        let encoder = FrameEncoder::new();
        let frame = encoder.encode(&gray(4, 2, 0x2A), false).unwrap();
        for y in 0..2 {
            assert_eq!(frame.row(0, y), frame.row(1, y));
            assert_eq!(frame.row(1, y), frame.row(2, y));
        }
    }

    #[test]
    fn test_balance_resets_per_row() {
        // Two identical rows must code identically: no balance carry-over.
        let encoder = FrameEncoder::new();
        let data: Vec<u8> = (0..8u8).chain(0..8u8).collect();
        let image = PixelImage::from_raw(8, 2, 1, data).unwrap();
        let frame = encoder.encode(&image, false).unwrap();
        assert_eq!(frame.row(0, 0), frame.row(0, 1));
    }

    #[test]
    fn test_blanked_frame_layout() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(7);
        let data: Vec<u8> = (0..640 * 480).map(|_| rng.gen()).collect();
        let image = PixelImage::from_raw(640, 480, 1, data).unwrap();

        let encoder = FrameEncoder::new();
        let frame = encoder.encode(&image, true).unwrap();
        assert_eq!(frame.width(), 800);
        assert_eq!(frame.height(), 525);

        // Non-designated channels idle at CTL_00 through the blanking area.
        assert_eq!(frame.row(0, 0)[0], CTL_00);
        assert_eq!(frame.row(1, 44)[799], CTL_00);
        // Designated channel carries the control pattern.
        assert_eq!(frame.row(2, 0)[0], CTL_00);
        assert_eq!(frame.row(2, 10)[50], crate::tmds::CTL_11);

        // Active block starts at (h_blank, v_blank) and matches a fresh
        // per-line encoding of the source row.
        let mut balance = 0;
        let expected: Vec<Symbol> = (0..640)
            .map(|x| {
                let (code, next) = encode_pixel(image.sample(x, 0, 0), balance);
                balance = next;
                code
            })
            .collect();
        for channel in 0..CHANNELS {
            assert_eq!(&frame.row(channel, 45)[160..], expected.as_slice());
        }
    }

    #[test]
    fn test_passthrough_centers_raw_values() {
        let encoder = FrameEncoder::new();
        let frame = encoder.passthrough(&gray(640, 480, 37)).unwrap();
        assert_eq!(frame.width(), 800);
        assert_eq!(frame.height(), 525);

        // Fill outside the centered image, raw values inside.
        assert_eq!(frame.row(0, 0)[0], UNCODED_FILL);
        assert_eq!(frame.row(1, 22)[79], UNCODED_FILL);
        assert_eq!(frame.row(1, 22)[80], 37);
        assert_eq!(frame.row(2, 501)[719], 37);
        assert_eq!(frame.row(2, 502)[80], UNCODED_FILL);
    }
}
