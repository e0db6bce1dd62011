//! Runtime configuration utilities for summarist.

use std::{env, path::PathBuf};

use anyhow::Context;
use serde::Deserialize;

/// Application configuration resolved from `.env` and defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Optional Hugging Face access token for gated model downloads.
    pub hf_token: Option<String>,
    /// Optional override for the model download cache directory.
    pub model_cache_dir: Option<PathBuf>,
}

impl Settings {
    /// Load configuration from environment with reasonable defaults.
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let hf_token = env::var("HF_TOKEN").ok().filter(|token| !token.is_empty());
        let model_cache_dir = env::var("MODEL_CACHE_DIR").ok().map(PathBuf::from);

        if let Some(dir) = &model_cache_dir {
            std::fs::create_dir_all(dir).context("creating model cache dir")?;
        }

        Ok(Self {
            hf_token,
            model_cache_dir,
        })
    }
}
