//! Writing intensity buffers to greyscale image files.

use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::Path,
};

use image::{ExtendedColorType, ImageFormat};
use log::{debug, warn};

use crate::{
    buffer::Intensities,
    error::{Error, Result},
    screen,
};

/// Pick the encoder from the extension of `path`. Unknown extensions get PNG.
pub(crate) fn image_format(path: &Path) -> Result<ImageFormat> {
    let format = ImageFormat::from_path(path).unwrap_or(ImageFormat::Png);
    if format.writing_enabled() {
        Ok(format)
    } else {
        Err(Error::UnsupportedFormat(path.display().to_string()))
    }
}

/**
Write `buffer` as an 8-bit greyscale image of `bounds` to `path`.

Nothing is created if `buffer` doesn't hold exactly `bounds.area()` pixels or
the extension names an encoder that isn't available. An existing file at
`path` is replaced. If encoding fails part-way the file is removed again, so a
file that was there before the call is gone too.
*/
pub fn write_image(path: &Path, buffer: &[u8], bounds: screen::Size) -> Result<()> {
    if buffer.len() != bounds.area() {
        return Err(Error::BufferSize {
            expected: bounds.area(),
            actual: buffer.len(),
        });
    }

    let format = image_format(path)?;
    debug!(
        "writing {}x{} {:?} to {}",
        bounds.width,
        bounds.height,
        format,
        path.display()
    );

    let file = File::create(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let result = encode(BufWriter::new(file), path, buffer, bounds, format);
    if result.is_err() {
        if let Err(error) = fs::remove_file(path) {
            warn!("could not remove partial {}: {}", path.display(), error);
        }
    }
    result
}

fn encode(
    mut writer: BufWriter<File>,
    path: &Path,
    buffer: &[u8],
    bounds: screen::Size,
    format: ImageFormat,
) -> Result<()> {
    image::write_buffer_with_format(
        &mut writer,
        buffer,
        bounds.width,
        bounds.height,
        ExtendedColorType::L8,
        format,
    )?;

    writer.flush().map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}

pub fn write_intensities(path: &Path, intensities: &Intensities) -> Result<()> {
    write_image(path, intensities, intensities.size())
}
