use axum::{
    extract::{
        multipart::MultipartRejection, rejection::QueryRejection, Multipart, Query, State,
    },
    Json,
};

use crate::{
    app::{models::api_error::ApiError, util::multipart::multipart::get_form_data},
    AppState,
};

use super::{
    dtos::generate_avatar_dto::GenerateAvatarDto,
    models::generate_avatar_response::GenerateAvatarResponse, service,
};

pub async fn generate_avatar(
    State(state): State<AppState>,
    query: Result<Query<GenerateAvatarDto>, QueryRejection>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<GenerateAvatarResponse>, ApiError> {
    let Query(dto) = query.map_err(|e| ApiError {
        code: e.status(),
        message: e.body_text(),
    })?;

    let multipart = multipart.map_err(|e| ApiError {
        code: e.status(),
        message: e.body_text(),
    })?;

    match get_form_data(multipart).await {
        Ok(form_data) => match service::generate_avatar(form_data, &dto, &state).await {
            Ok(res) => Ok(Json(res)),
            Err(e) => Err(e),
        },
        Err(e) => Err(e),
    }
}
