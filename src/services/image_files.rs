//! Reading reference photos and writing generated posters.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use tracing::info;

use crate::domain::{AppError, InlineImage};

/// Read an image file fully into memory as an inline image.
pub fn load_reference_image(path: &Path) -> Result<InlineImage, AppError> {
    let mime = mime_guess::from_path(path)
        .first()
        .filter(|mime| mime.type_() == mime_guess::mime::IMAGE)
        .ok_or_else(|| AppError::UnsupportedImageType(path.display().to_string()))?;

    let bytes = fs::read(path)?;
    info!(path = %path.display(), bytes = bytes.len(), mime = %mime, "loaded reference image");
    Ok(InlineImage::from_bytes(mime.essence_str(), &bytes))
}

/// Decode a generated poster and write it as `travel-poster-<millis>.<ext>`.
pub fn save_poster(directory: &Path, poster: &InlineImage) -> Result<PathBuf, AppError> {
    let bytes = poster.decode()?;
    fs::create_dir_all(directory)?;

    let file_name =
        format!("travel-poster-{}.{}", Utc::now().timestamp_millis(), poster.file_extension());
    let path = directory.join(file_name);
    fs::write(&path, bytes)?;
    info!(path = %path.display(), "saved poster");
    Ok(path)
}
