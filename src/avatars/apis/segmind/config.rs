pub static QUALITY_SUFFIX: &str = "masterpiece, best quality";
pub static NEGATIVE_PROMPT: &str = "ugly, blurry, deformed, low quality";

pub const SAMPLES: u8 = 1;
pub const NUM_INFERENCE_STEPS: u8 = 20;
pub const GUIDANCE_SCALE: f32 = 7.0;
pub const STRENGTH: f32 = 0.7;
pub const IMG_WIDTH: u16 = 512;
pub const IMG_HEIGHT: u16 = 768;
