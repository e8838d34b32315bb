use axum::extract::{multipart::MultipartError, Multipart};
use mime::Mime;

use crate::app::models::api_error::ApiError;

use super::models::{file_properties::FileProperties, form_data::FormData};

pub async fn get_form_data(mut multipart: Multipart) -> Result<FormData, ApiError> {
    let mut form_data = FormData::default();

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => return Err(to_api_error(e)),
        };

        let field_name = field.name().unwrap_or("file").to_string();

        // fields without a file name are plain form values
        let Some(file_name) = field.file_name().map(|n| n.to_string()) else {
            let text = field.text().await.map_err(to_api_error)?;
            form_data.fields.insert(field_name, text);
            continue;
        };

        let mime_type = field
            .content_type()
            .and_then(|c| c.parse::<Mime>().ok())
            .unwrap_or(mime::APPLICATION_OCTET_STREAM);

        let data = field.bytes().await.map_err(to_api_error)?;

        form_data.files.push(FileProperties {
            field_name,
            file_name,
            mime_type,
            data,
        });
    }

    Ok(form_data)
}

fn to_api_error(e: MultipartError) -> ApiError {
    tracing::warn!(%e, "failed to read multipart body");

    ApiError {
        code: e.status(),
        message: e.body_text(),
    }
}
