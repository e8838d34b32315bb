use serde::Deserialize;

pub const DEFAULT_SEGMIND_API_URL: &str = "https://api.segmind.com/v1/potraitsd1.5-txt2img";

#[derive(Debug, Clone, Deserialize)]
pub struct Envy {
    #[serde(default = "default_app_env")]
    pub app_env: String,
    pub port: Option<u16>,

    #[serde(default = "default_cors_origin")]
    pub cors_origin: String,

    pub segmind_api_key: String,
    #[serde(default = "default_segmind_api_url")]
    pub segmind_api_url: String,

    #[serde(default = "default_upstream_timeout_secs")]
    pub upstream_timeout_secs: u64,
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,
}

impl Envy {
    pub fn from_env() -> Result<Self, envy::Error> {
        envy::from_env::<Envy>()
    }

    pub fn with_upstream(segmind_api_key: &str, segmind_api_url: &str) -> Self {
        Self {
            app_env: default_app_env(),
            port: None,
            cors_origin: default_cors_origin(),
            segmind_api_key: segmind_api_key.to_string(),
            segmind_api_url: segmind_api_url.to_string(),
            upstream_timeout_secs: default_upstream_timeout_secs(),
            max_upload_bytes: default_max_upload_bytes(),
        }
    }
}

fn default_app_env() -> String {
    "development".to_string()
}

fn default_cors_origin() -> String {
    "http://localhost:5173".to_string()
}

fn default_segmind_api_url() -> String {
    DEFAULT_SEGMIND_API_URL.to_string()
}

fn default_upstream_timeout_secs() -> u64 {
    30
}

fn default_max_upload_bytes() -> usize {
    10 * 1024 * 1024
}
