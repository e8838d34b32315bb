use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct InputSpec {
    pub prompt: String,
    pub negative_prompt: String,
    pub image: String,
    pub samples: u8,
    pub num_inference_steps: u8,
    pub guidance_scale: f32,
    pub strength: f32,
    pub img_width: u16,
    pub img_height: u16,
    pub base64: bool,
}
