use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use raylib::prelude::*;
use exif::{Reader, Tag, Value, In};
use log::{debug, warn};

use crate::error::{CarouselError, Result};
use crate::slide::Slide;

/// Rotation needed to display an image upright.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Rotation {
    None,
    Half,             // 180 deg
    Clockwise,        // 90 deg clockwise
    CounterClockwise, // 90 deg counter-clockwise
}

impl Rotation {
    /// Maps an EXIF orientation value. Mirrored orientations are not handled.
    pub fn from_orientation(orientation: u16) -> Rotation {
        match orientation {
            3 => Rotation::Half,
            6 => Rotation::Clockwise,
            8 => Rotation::CounterClockwise,
            _ => Rotation::None,
        }
    }
}

/// Slide sources are relative URIs; absolute ones are used as-is.
pub fn resolve_source(assets_dir: &Path, source: &str) -> PathBuf {
    let source = source.trim_start_matches("./");
    let path = Path::new(source);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        assets_dir.join(path)
    }
}

/// Reads the EXIF orientation tag from JPEG bytes.
pub fn exif_orientation(bytes: &[u8]) -> std::result::Result<u16, exif::Error> {
    let exif = Reader::new().read_from_container(&mut Cursor::new(bytes))?;
    let orientation = exif
        .get_field(Tag::Orientation, In::PRIMARY)
        .and_then(|field| match &field.value {
            Value::Short(values) => values.first().copied(),
            _ => None,
        })
        .unwrap_or(1);
    Ok(orientation)
}

fn image_error(path: &Path, message: impl ToString) -> CarouselError {
    CarouselError::Image {
        path: path.to_path_buf(),
        message: message.to_string(),
    }
}

// --- Load Image, Apply EXIF Rotation, Create Texture ---
pub fn load_texture_with_exif_rotation(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    image_path: &Path,
) -> Result<Texture2D> {
    let file_bytes = fs::read(image_path).map_err(|e| image_error(image_path, e))?;

    let extension = image_path.extension().and_then(|s| s.to_str()).unwrap_or("").to_lowercase();

    // EXIF is only read reliably from JPEG containers
    let rotation = if extension == "jpg" || extension == "jpeg" {
        match exif_orientation(&file_bytes) {
            Ok(orientation) => Rotation::from_orientation(orientation),
            Err(e) => {
                warn!("Could not read EXIF data for {}: {}", image_path.display(), e);
                Rotation::None
            }
        }
    } else {
        Rotation::None
    };

    let mut image = Image::load_image_from_mem(&(".".to_string() + &extension), &file_bytes)
        .map_err(|e| image_error(image_path, e))?;

    match rotation {
        Rotation::Half => {
            image.rotate_cw();
            image.rotate_cw();
        }
        Rotation::Clockwise => image.rotate_cw(),
        Rotation::CounterClockwise => image.rotate_ccw(),
        Rotation::None => {}
    }
    if rotation != Rotation::None {
        debug!("Applied {:?} rotation to {}", rotation, image_path.display());
    }

    let texture = rl.load_texture_from_image(thread, &image)
        .map_err(|e| image_error(image_path, e))?;

    // Pixel data lives on the GPU from here on
    drop(image);

    Ok(texture)
}

/// Loads one texture per slide. A failed slide keeps its place as `None`
/// so indices stay aligned with the carousel.
pub fn load_slide_textures(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    assets_dir: &Path,
    slides: &[Slide],
) -> Vec<Option<Texture2D>> {
    slides
        .iter()
        .map(|slide| {
            let path = resolve_source(assets_dir, slide.source());
            match load_texture_with_exif_rotation(rl, thread, &path) {
                Ok(texture) => Some(texture),
                Err(e) => {
                    warn!("{}; showing \"{}\" as placeholder", e, slide.alt_text());
                    None
                }
            }
        })
        .collect()
}
