//! Loading and saving images at the edges of the engine.
//!
//! Everything handed to the engine is normalized to RGBA8 first, formats
//! without alpha come back fully opaque.

use image::{DynamicImage, ImageFormat, RgbaImage};
use tracing::debug;

use std::ffi::OsStr;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::Error;

pub fn open(path: &Path) -> Result<RgbaImage, Error> {
    let image = image::open(path).map_err(|source| Error::Open {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(
        path = %path.display(),
        width = image.width(),
        height = image.height(),
        "opened image"
    );
    Ok(image.to_rgba8())
}

pub fn decode(bytes: &[u8]) -> Result<RgbaImage, Error> {
    if bytes.is_empty() {
        return Err(Error::EmptyInput);
    }
    let image = image::load_from_memory(bytes).map_err(Error::Decode)?;
    Ok(image.to_rgba8())
}

/// Writes `image` to a uniquely named file next to `path` and renames it into
/// place, so a failed save never leaves a half-written destination behind.
pub fn save(image: &RgbaImage, path: &Path) -> Result<(), Error> {
    let format = ImageFormat::from_path(path).map_err(|source| Error::Save {
        path: path.to_path_buf(),
        source,
    })?;
    let write_error = |source| Error::Write {
        path: path.to_path_buf(),
        source,
    };
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    // removed on drop unless persisted
    let mut temp = tempfile::Builder::new()
        .prefix(".pixlr-")
        .tempfile_in(dir)
        .map_err(write_error)?;
    {
        let dynamic = DynamicImage::ImageRgba8(image.clone());
        let mut writer = BufWriter::new(temp.as_file_mut());
        let encoded = match format {
            // jpeg cannot store alpha
            ImageFormat::Jpeg => {
                DynamicImage::ImageRgb8(dynamic.to_rgb8()).write_to(&mut writer, format)
            }
            _ => dynamic.write_to(&mut writer, format),
        };
        encoded.map_err(|source| Error::Save {
            path: path.to_path_buf(),
            source,
        })?;
        writer.flush().map_err(write_error)?;
    }
    temp.persist(path).map_err(|err| write_error(err.error))?;
    debug!(path = %path.display(), ?format, "saved image");
    Ok(())
}

/// `photo.jpg` becomes `photo.sorted.jpg`, inputs without an extension get `png`.
pub fn default_output(input: &Path) -> PathBuf {
    let extension = input
        .extension()
        .and_then(OsStr::to_str)
        .unwrap_or("png");
    input.with_extension(["sorted", ".", extension].concat())
}
