use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct GenerateAvatarResponse {
    pub image_base64: String,
}
