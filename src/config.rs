use serde::{Deserialize, Serialize};
use std::env;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/openai/";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub api_key: Option<String>,
    pub base_url: String,
    pub outline_model: String,
    pub outline_temperature: f32,
    pub proofread_model: String,
    pub proofread_reasoning_effort: String,
    pub debug: bool,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            api_key: env::var("GEMINI_API_KEY").ok().filter(|v| !v.is_empty()),
            base_url: env::var("ORACLE_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into()),
            outline_model: env::var("OUTLINE_MODEL")
                .unwrap_or_else(|_| "gemini-1.5-flash-latest".into()),
            outline_temperature: env::var("OUTLINE_TEMPERATURE")
                .unwrap_or_else(|_| "0.35".into())
                .parse()
                .unwrap_or(0.35),
            proofread_model: env::var("PROOFREAD_MODEL")
                .unwrap_or_else(|_| "gemini-2.5-flash".into()),
            proofread_reasoning_effort: env::var("PROOFREAD_REASONING_EFFORT")
                .unwrap_or_else(|_| "low".into()),
            debug: env::var("DEBUG")
                .map(|v| v == "1" || v == "true")
                .unwrap_or(false),
        }
    }
}
