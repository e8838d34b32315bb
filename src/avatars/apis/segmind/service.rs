use std::time::Duration;

use reqwest::{Client, Response, StatusCode};

use crate::{
    app::envy::Envy,
    avatars::{enums::avatar_style::AvatarStyle, errors::AvatarApiError},
};

use super::{
    config::{
        GUIDANCE_SCALE, IMG_HEIGHT, IMG_WIDTH, NEGATIVE_PROMPT, NUM_INFERENCE_STEPS,
        QUALITY_SUFFIX, SAMPLES, STRENGTH,
    },
    models::input_spec::InputSpec,
    structs::segmind_generate_response::SegmindGenerateResponse,
};

pub fn provide_prompt(style: AvatarStyle) -> String {
    format!("{}, {}", style.prompt(), QUALITY_SUFFIX)
}

pub fn provide_input_spec(style: AvatarStyle, image_base64: String) -> InputSpec {
    InputSpec {
        prompt: provide_prompt(style),
        negative_prompt: NEGATIVE_PROMPT.to_string(),
        image: image_base64,
        samples: SAMPLES,
        num_inference_steps: NUM_INFERENCE_STEPS,
        guidance_scale: GUIDANCE_SCALE,
        strength: STRENGTH,
        img_width: IMG_WIDTH,
        img_height: IMG_HEIGHT,
        base64: true,
    }
}

pub async fn segmind_generate_image(
    input_spec: &InputSpec,
    envy: &Envy,
    client: &Client,
) -> Result<String, AvatarApiError> {
    tracing::info!("sending request to segmind");

    let result = client
        .post(&envy.segmind_api_url)
        .header("x-api-key", &envy.segmind_api_key)
        .timeout(Duration::from_secs(envy.upstream_timeout_secs))
        .json(input_spec)
        .send()
        .await;

    match result {
        Ok(res) => parse_response_to_image(res).await,
        Err(e) => {
            if e.is_timeout() {
                tracing::error!(%e, "segmind request timed out");
            } else {
                tracing::error!(%e, "segmind request failed");
            }
            Err(AvatarApiError::Internal)
        }
    }
}

async fn parse_response_to_image(res: Response) -> Result<String, AvatarApiError> {
    let status = res.status();
    tracing::info!(%status, "segmind responded");

    let text = match res.text().await {
        Ok(text) => text,
        Err(e) => {
            tracing::error!(%e, "failed to read segmind response body");
            return Err(AvatarApiError::Internal);
        }
    };

    if status != StatusCode::OK {
        tracing::warn!(%status, body = %text, "segmind returned an error");
        return Err(AvatarApiError::from_upstream(status, text));
    }

    let response: SegmindGenerateResponse = match serde_json::from_str(&text) {
        Ok(response) => response,
        Err(e) => {
            tracing::error!(%e, %text, "failed to parse segmind response");
            return Err(AvatarApiError::Internal);
        }
    };

    response.into_first_image().ok_or_else(|| {
        tracing::error!("segmind returned no image");
        AvatarApiError::EmptyResult
    })
}
