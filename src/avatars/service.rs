use tracing::Instrument;
use uuid::Uuid;

use crate::{
    app::{models::api_error::ApiError, util::multipart::models::form_data::FormData},
    AppState,
};

use super::{
    apis::segmind,
    dtos::generate_avatar_dto::GenerateAvatarDto,
    enums::avatar_style::AvatarStyle,
    errors::AvatarApiError,
    models::generate_avatar_response::GenerateAvatarResponse,
    util::normalize::normalize_to_png_base64,
};

pub async fn generate_avatar(
    mut form_data: FormData,
    dto: &GenerateAvatarDto,
    state: &AppState,
) -> Result<GenerateAvatarResponse, ApiError> {
    // the form field wins over the query string
    let style = form_data
        .field("style")
        .map(|s| s.to_string())
        .or_else(|| dto.style.clone());

    let span = tracing::info_span!(
        "generate_avatar",
        request_id = %Uuid::new_v4(),
        style = style.as_deref().unwrap_or_default(),
    );

    let result = relay(&mut form_data, style.as_deref(), state)
        .instrument(span)
        .await;

    match result {
        Ok(image_base64) => Ok(GenerateAvatarResponse { image_base64 }),
        Err(e) => Err(e.value()),
    }
}

async fn relay(
    form_data: &mut FormData,
    style: Option<&str>,
    state: &AppState,
) -> Result<String, AvatarApiError> {
    let Some(file) = form_data.take_file("file") else {
        return Err(AvatarApiError::NoFile);
    };

    let Some(style) = style.and_then(AvatarStyle::from_value) else {
        return Err(AvatarApiError::InvalidStyle);
    };

    tracing::info!(
        file_name = %file.file_name,
        mime_type = %file.mime_type,
        size = file.data.len(),
        "file read successfully"
    );

    let image_base64 = normalize_to_png_base64(file.data).await?;

    let input_spec = segmind::service::provide_input_spec(style, image_base64);
    tracing::info!(prompt = %input_spec.prompt, "using prompt");

    segmind::service::segmind_generate_image(&input_spec, &state.envy, &state.client).await
}
