use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::sync::Semaphore;

use crate::canon::BookSpec;
use crate::config::GeminiConfig;
use crate::gemini::GeminiClient;
use crate::models::AiContextResponse;

/// Generates short commentary on a verse, optionally in a persona's voice.
#[derive(Clone)]
pub struct ContextService {
    gemini: GeminiClient,
    max_output_tokens: u32,
    generation_limit: Arc<Semaphore>,
}

impl ContextService {
    pub fn new(
        gemini: GeminiClient,
        max_output_tokens: u32,
        generation_limit: Arc<Semaphore>,
    ) -> Self {
        Self {
            gemini,
            max_output_tokens,
            generation_limit,
        }
    }

    pub fn from_config(config: &GeminiConfig) -> Self {
        let gemini = GeminiClient::new(
            config.base_url.clone(),
            config.model.clone(),
            config.api_key.clone(),
        );
        Self::new(
            gemini,
            config.max_output_tokens,
            Arc::new(Semaphore::new(config.max_concurrent)),
        )
    }

    pub fn is_configured(&self) -> bool {
        self.gemini.is_configured()
    }

    pub async fn explain(
        &self,
        book: &BookSpec,
        chapter: u32,
        verse: u32,
        persona: Option<&str>,
    ) -> Result<AiContextResponse> {
        let persona = normalize_persona(persona);
        let prompt = build_prompt(book.name, chapter, verse, persona.as_deref());

        let _permit = self
            .generation_limit
            .acquire()
            .await
            .context("generation limiter closed")?;

        tracing::debug!(
            "requesting context for {} {}:{} from {} (persona: {})",
            book.name,
            chapter,
            verse,
            self.gemini.model(),
            persona.as_deref().unwrap_or("none")
        );
        let text = self
            .gemini
            .generate_text(&prompt, self.max_output_tokens)
            .await?;

        Ok(AiContextResponse { text, persona })
    }
}

/// Blank input and the UI's `default` choice both mean no persona.
pub fn normalize_persona(persona: Option<&str>) -> Option<String> {
    let persona = persona?.trim();
    if persona.is_empty() || persona.eq_ignore_ascii_case("default") {
        return None;
    }
    Some(persona.to_string())
}

pub fn build_prompt(book_name: &str, chapter: u32, verse: u32, persona: Option<&str>) -> String {
    let reference = format!("{book_name} {chapter}:{verse}");
    match persona {
        Some(persona) => format!(
            "Speaking as {persona}, in one tight paragraph, explain the context of {reference} \
             and add an insight that {persona} might have. No verse quotes. Weave the sayings \
             or writings of {persona} into the paragraph if relevant. Let your voice as \
             {persona} shape the tone and insight."
        ),
        None => format!(
            "In one tight, gritty paragraph, explain why the verse at {reference} matters. \
             No verse quotes, just tell how it fits in the story that's unfolding. Name the \
             speaker or what's happening, and why it packs a punch. For Old Testament, spot \
             any Christian typology (like the Ark hinting at Mary) and hit it quick."
        ),
    }
}
