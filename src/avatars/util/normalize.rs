use std::io::Cursor;

use bytes::Bytes;
use image::{GenericImageView, ImageOutputFormat};

use crate::avatars::errors::AvatarApiError;

/// Decodes an uploaded image on the blocking pool and re-encodes it as base64 PNG.
pub async fn normalize_to_png_base64(data: Bytes) -> Result<String, AvatarApiError> {
    match tokio::task::spawn_blocking(move || encode_png_base64(&data)).await {
        Ok(result) => result,
        Err(e) => {
            tracing::error!(%e, "image normalization task failed");
            Err(AvatarApiError::Internal)
        }
    }
}

pub fn encode_png_base64(data: &[u8]) -> Result<String, AvatarApiError> {
    if data.is_empty() {
        return Err(AvatarApiError::NoFile);
    }

    let format = image::guess_format(data).ok();

    let img = match image::load_from_memory(data) {
        Ok(img) => img,
        Err(e) => {
            tracing::warn!(%e, "failed to decode uploaded image");
            return Err(AvatarApiError::InvalidImage);
        }
    };

    let (width, height) = img.dimensions();
    tracing::info!(
        format = ?format,
        width,
        height,
        "decoded uploaded image"
    );

    let mut png = Vec::new();
    if let Err(e) = img.write_to(&mut Cursor::new(&mut png), ImageOutputFormat::Png) {
        tracing::error!(%e, "failed to encode image as png");
        return Err(AvatarApiError::Internal);
    }

    Ok(base64::encode(&png))
}
