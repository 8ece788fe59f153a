use crate::error::AppError;
use base64::Engine;
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::ImageReader;
use std::io::{Cursor, Read};
use std::path::Path;

const PREVIEW_MAX_DIM: u32 = 1280;
const PREVIEW_QUALITY: u8 = 80;

/// Render an image file as a base64 `data:` URL for the preview surface.
/// Respects EXIF orientation.
pub fn image_preview_data_url(path: &Path) -> Result<String, AppError> {
    let orientation = read_orientation(path);

    let mut img = ImageReader::open(path)
        .map_err(|e| AppError {
            message: format!("Failed to open image {}: {}", path.display(), e),
        })?
        .decode()
        .map_err(|e| AppError {
            message: format!("Failed to decode image {}: {}", path.display(), e),
        })?;

    // Resize before rotating; rotating the full-size image is much slower.
    if img.width() > PREVIEW_MAX_DIM || img.height() > PREVIEW_MAX_DIM {
        img = img.resize(PREVIEW_MAX_DIM, PREVIEW_MAX_DIM, FilterType::Triangle);
    }

    if orientation != 1 {
        img = apply_orientation(img, orientation);
    }

    let mut buffer = Cursor::new(Vec::new());
    let encoder = JpegEncoder::new_with_quality(&mut buffer, PREVIEW_QUALITY);
    img.write_with_encoder(encoder)?;

    let b64 = base64::engine::general_purpose::STANDARD.encode(buffer.into_inner());
    Ok(format!("data:image/jpeg;base64,{}", b64))
}

/// Read the file header to find the EXIF orientation tag, defaulting to 1.
fn read_orientation(path: &Path) -> u32 {
    let file = match std::fs::File::open(path) {
        Ok(f) => f,
        Err(_) => return 1,
    };

    // Read first 128KB (covers most EXIF headers)
    let mut header_buf = Vec::with_capacity(128 * 1024);
    if file.take(128 * 1024).read_to_end(&mut header_buf).is_err() {
        return 1;
    }

    let exif = match exif::Reader::new().read_from_container(&mut Cursor::new(&header_buf)) {
        Ok(e) => e,
        Err(_) => return 1,
    };

    if let Some(field) = exif.get_field(exif::Tag::Orientation, exif::In::PRIMARY) {
        match field.value {
            exif::Value::Short(ref v) => *v.first().unwrap_or(&1) as u32,
            exif::Value::Long(ref v) => *v.first().unwrap_or(&1),
            _ => 1,
        }
    } else {
        1
    }
}

/// Apply EXIF orientation to the image.
fn apply_orientation(img: image::DynamicImage, orientation: u32) -> image::DynamicImage {
    match orientation {
        2 => img.fliph(),
        3 => img.rotate180(),
        4 => img.flipv(),
        5 => img.fliph().rotate90(),
        6 => img.rotate90(),
        7 => img.fliph().rotate270(),
        8 => img.rotate270(),
        _ => img,
    }
}
