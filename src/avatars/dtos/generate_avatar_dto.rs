use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct GenerateAvatarDto {
    pub style: Option<String>,
}
