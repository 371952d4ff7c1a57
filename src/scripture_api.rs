use std::sync::OnceLock;

use anyhow::{Context, Result};
use regex::Regex;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::Deserialize;

use crate::canon::{book_by_api_code, BookSpec};
use crate::models::{BibleTranslation, BibleVerse, VerseAddress};

pub const DEFAULT_SEARCH_LIMIT: u32 = 10;

#[derive(Debug)]
pub struct TranslationSpec {
    pub id: &'static str,
    pub bible_id: &'static str,
    pub name: &'static str,
    pub language: &'static str,
}

impl TranslationSpec {
    pub fn to_translation(&self) -> BibleTranslation {
        BibleTranslation {
            id: self.id.to_string(),
            name: self.name.to_string(),
            abbreviation: self.id.to_string(),
            language: self.language.to_string(),
        }
    }
}

pub static TRANSLATIONS: &[TranslationSpec] = &[
    TranslationSpec {
        id: "GNT",
        bible_id: "65eec8e0b60e656b-01",
        name: "Good News Translation",
        language: "English",
    },
    TranslationSpec {
        id: "NRSV-CE",
        bible_id: "40072c4a5aba4022-01",
        name: "New Revised Standard Version Catholic Edition",
        language: "English",
    },
    TranslationSpec {
        id: "DRA",
        bible_id: "179568874c45066f-01",
        name: "Douay-Rheims American Edition",
        language: "English",
    },
];

/// Case-insensitive; dashes and spaces are ignored, so `nrsvce` finds
/// `NRSV-CE`.
pub fn find_translation(key: &str) -> Option<&'static TranslationSpec> {
    let wanted = normalize_translation_key(key);
    TRANSLATIONS
        .iter()
        .find(|t| normalize_translation_key(t.id) == wanted)
}

fn normalize_translation_key(key: &str) -> String {
    key.chars()
        .filter(|c| !matches!(c, '-' | ' ' | '_'))
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Client for the API.Bible REST service.
#[derive(Clone)]
pub struct ScriptureClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl ScriptureClient {
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key,
        }
    }

    pub async fn get_verse(
        &self,
        translation: &TranslationSpec,
        book: &BookSpec,
        chapter: u32,
        verse: u32,
    ) -> Result<BibleVerse> {
        #[derive(Deserialize)]
        struct VerseResp {
            data: VerseData,
        }

        #[derive(Deserialize)]
        struct VerseData {
            content: String,
        }

        let url = format!(
            "{}/bibles/{}/verses/{}.{}.{}",
            self.base_url, translation.bible_id, book.api_code, chapter, verse
        );
        let response = self
            .authorized(self.client.get(url))?
            .send()
            .await
            .context("failed to call API.Bible verses endpoint")?;
        let response = ensure_success(response, "verses").await?;

        let body = response
            .json::<VerseResp>()
            .await
            .context("failed to decode API.Bible verse response")?;

        Ok(BibleVerse {
            book: book.id.to_string(),
            chapter,
            verse,
            text: clean_verse_text(&body.data.content),
            translation: translation.id.to_string(),
        })
    }

    pub async fn search(
        &self,
        translation: &TranslationSpec,
        query: &str,
        limit: u32,
    ) -> Result<Vec<BibleVerse>> {
        #[derive(Deserialize)]
        struct SearchResp {
            data: SearchData,
        }

        #[derive(Deserialize)]
        struct SearchData {
            #[serde(default)]
            verses: Vec<SearchVerse>,
        }

        #[derive(Deserialize)]
        struct SearchVerse {
            id: String,
            text: String,
        }

        let query = query.trim();
        if query.is_empty() {
            anyhow::bail!("cannot search with an empty query");
        }

        let url = format!("{}/bibles/{}/search", self.base_url, translation.bible_id);
        let limit = limit.to_string();
        let response = self
            .authorized(self.client.get(url))?
            .query(&[("query", query), ("limit", limit.as_str())])
            .send()
            .await
            .context("failed to call API.Bible search endpoint")?;
        let response = ensure_success(response, "search").await?;

        let body = response
            .json::<SearchResp>()
            .await
            .context("failed to decode API.Bible search response")?;

        let mut verses = Vec::with_capacity(body.data.verses.len());
        for hit in body.data.verses {
            let Some(address) = parse_verse_id(&hit.id) else {
                tracing::debug!("skipping search hit with unrecognised id {}", hit.id);
                continue;
            };
            verses.push(BibleVerse {
                book: address.book,
                chapter: address.chapter,
                verse: address.verse,
                text: clean_verse_text(&hit.text),
                translation: translation.id.to_string(),
            });
        }

        Ok(verses)
    }

    fn authorized(&self, request: RequestBuilder) -> Result<RequestBuilder> {
        let key = self
            .api_key
            .as_deref()
            .context("API.Bible key is not configured (set API_BIBLE_KEY)")?;
        Ok(request.header("api-key", key))
    }
}

async fn ensure_success(response: Response, endpoint: &str) -> Result<Response> {
    if response.status() == StatusCode::OK {
        return Ok(response);
    }

    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    anyhow::bail!(
        "API.Bible {endpoint} returned {status}: {}",
        normalize_err_body(&body)
    )
}

fn normalize_err_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return "<empty body>".to_string();
    }

    if let Ok(json) = serde_json::from_str::<serde_json::Value>(trimmed) {
        for field in ["message", "error"] {
            if let Some(msg) = json.get(field).and_then(|v| v.as_str()) {
                return msg.to_string();
            }
        }
    }

    trimmed.to_string()
}

/// Parse an API.Bible verse id (`JHN.3.16`, or the first half of a range
/// such as `JHN.3.16-JHN.3.17`).
pub fn parse_verse_id(id: &str) -> Option<VerseAddress> {
    let first = id.split('-').next()?.trim();
    let mut parts = first.split('.');
    let book = book_by_api_code(parts.next()?)?;
    let chapter: u32 = parts.next()?.parse().ok()?;
    let verse: u32 = parts.next()?.parse().ok()?;
    if parts.next().is_some() || chapter == 0 || verse == 0 {
        return None;
    }
    Some(VerseAddress::new(book.id, chapter, verse))
}

/// Drop the leading verse number API.Bible puts in front of verse content,
/// keeping any opening paragraph tag.
pub fn clean_verse_text(text: &str) -> String {
    let mut cleaned = text.trim().to_string();
    for (pattern, replacement) in leading_number_patterns() {
        cleaned = pattern.replace(&cleaned, *replacement).into_owned();
    }
    cleaned
}

fn leading_number_patterns() -> &'static [(Regex, &'static str)] {
    static PATTERNS: OnceLock<Vec<(Regex, &'static str)>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        [
            (
                r#"^(<p[^>]*>)\s*<span[^>]*class="v"[^>]*>\s*\d+\s*</span>\s*"#,
                "$1",
            ),
            (r"^(<p[^>]*>)\s*\d+\s+", "$1"),
            (r"^\s*\d+\s+", ""),
        ]
        .into_iter()
        .filter_map(|(pattern, replacement)| {
            Regex::new(pattern).ok().map(|re| (re, replacement))
        })
        .collect()
    })
}
