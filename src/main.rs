use std::env;
use std::error::Error;
use std::fs::File;
use std::io::{BufWriter, Write};

use log::info;

use tmds_source::{PixelImage, SourceMode, TmdsSource};

/// Demo driver: encode an image into a TMDS symbol stream and dump it line by
/// line, the way a radio back end would pull it.
fn main() -> Result<(), Box<dyn Error>> {
    // Initialize logging.
    env_logger::init();

    let mut args = env::args().skip(1);
    let image_path = match args.next() {
        Some(path) => path,
        None => {
            eprintln!("usage: tmds-source <image> [mode 1-4] [output.bin]");
            std::process::exit(2);
        }
    };
    let mode = match args.next() {
        Some(raw) => SourceMode::try_from(raw.parse::<u8>()?)?,
        None => SourceMode::EncodedOnce,
    };
    let output_path = args.next();

    // Decode the image and hand it to the source.
    let decoded = image::open(&image_path)?;
    let image = PixelImage::from_dynamic(&decoded);
    info!(
        "loaded {} ({}x{}), mode {:?}",
        image_path,
        image.width(),
        image.height(),
        mode
    );

    let mut source = TmdsSource::new(&image, mode)?;
    let mut output = match &output_path {
        Some(path) => Some(BufWriter::new(File::create(path)?)),
        None => None,
    };

    // One-shot modes run to end-of-stream; loop modes would never end, so
    // stop after one full frame.
    let height = source.height();
    let mut lines = 0usize;
    while let Some(line) = source.fetch_line() {
        if let Some(out) = output.as_mut() {
            for channel in [line.red, line.green, line.blue] {
                for &symbol in channel {
                    out.write_all(&symbol.to_le_bytes())?;
                }
            }
        }
        lines += 1;
        if !mode.is_one_shot() && lines == height {
            break;
        }
    }

    if let Some(out) = output.as_mut() {
        out.flush()?;
    }
    info!(
        "streamed {} lines of {} symbols per channel",
        lines,
        source.width()
    );

    Ok(())
}
