use std::env;
use std::path::PathBuf;

use crate::scripture_api::find_translation;

const FALLBACK_TRANSLATION: &str = "GNT";

#[derive(Clone, Debug)]
pub struct ScriptureApiConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    pub default_translation: String,
}

#[derive(Clone, Debug)]
pub struct GeminiConfig {
    pub base_url: String,
    pub model: String,
    pub api_key: Option<String>,
    pub max_output_tokens: u32,
    pub max_concurrent: usize,
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub bind_addr: String,
    pub static_dir: PathBuf,
    pub scripture: ScriptureApiConfig,
    pub gemini: GeminiConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any variable source. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        Self {
            bind_addr: var("VERSE_EXPLORER_BIND").unwrap_or_else(|| "127.0.0.1:8080".to_string()),
            static_dir: var("VERSE_EXPLORER_STATIC")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("./static")),
            scripture: ScriptureApiConfig {
                base_url: var("API_BIBLE_URL")
                    .unwrap_or_else(|| "https://api.scripture.api.bible/v1".to_string()),
                api_key: var("API_BIBLE_KEY"),
                default_translation: default_translation(var("DEFAULT_TRANSLATION")),
            },
            gemini: GeminiConfig {
                base_url: var("GEMINI_API_URL").unwrap_or_else(|| {
                    "https://generativelanguage.googleapis.com/v1beta".to_string()
                }),
                model: var("GEMINI_MODEL").unwrap_or_else(|| "gemini-2.0-flash".to_string()),
                api_key: var("GEMINI_API_KEY"),
                max_output_tokens: var("AI_CONTEXT_MAX_TOKENS")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(250),
                max_concurrent: var("AI_CONTEXT_CONCURRENCY")
                    .and_then(|v| v.parse().ok())
                    .filter(|n: &usize| *n > 0)
                    .unwrap_or(4),
            },
        }
    }
}

/// Resolve the configured translation to its canonical id. Unknown values
/// fall back to GNT so random-verse requests keep working.
fn default_translation(configured: Option<String>) -> String {
    let Some(configured) = configured else {
        return FALLBACK_TRANSLATION.to_string();
    };
    match find_translation(&configured) {
        Some(translation) => translation.id.to_string(),
        None => {
            tracing::warn!(
                "DEFAULT_TRANSLATION '{}' is not supported; using {}",
                configured,
                FALLBACK_TRANSLATION
            );
            FALLBACK_TRANSLATION.to_string()
        }
    }
}
