use std::sync::Arc;

use crate::app::envy::Envy;

pub mod app;
pub mod avatars;

#[derive(Clone)]
pub struct AppState {
    pub envy: Arc<Envy>,
    pub client: reqwest::Client,
}

impl AppState {
    pub fn new(envy: Envy) -> Self {
        Self {
            envy: Arc::new(envy),
            client: reqwest::Client::new(),
        }
    }
}
