use std::path::PathBuf;
use std::sync::Arc;

use crate::config;

#[derive(Clone)]
pub struct AppState {
    pub api_base_url: Arc<str>,
    pub static_dir: Arc<PathBuf>,
}

impl AppState {
    pub fn new(api_base_url: impl Into<Arc<str>>, static_dir: PathBuf) -> Self {
        Self {
            api_base_url: api_base_url.into(),
            static_dir: Arc::new(static_dir),
        }
    }

    pub fn from_env() -> Self {
        Self::new(config::api_base_url(), config::static_dir())
    }
}
