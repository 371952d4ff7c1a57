use std::fmt;

use serde::{Deserialize, Serialize};

use crate::canon::{BookGroup, Testament};

/// A (book, chapter, verse-within-chapter) triple. `book` is a canon id such
/// as `1samuel`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VerseAddress {
    pub book: String,
    pub chapter: u32,
    pub verse: u32,
}

impl VerseAddress {
    pub fn new(book: impl Into<String>, chapter: u32, verse: u32) -> Self {
        Self {
            book: book.into(),
            chapter,
            verse,
        }
    }
}

impl fmt::Display for VerseAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}:{}", self.book, self.chapter, self.verse)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BibleBook {
    pub id: String,
    pub name: String,
    pub testament: Testament,
    pub group: BookGroup,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BibleVerse {
    pub book: String,
    pub chapter: u32,
    pub verse: u32,
    pub text: String,
    pub translation: String,
}

impl BibleVerse {
    pub fn address(&self) -> VerseAddress {
        VerseAddress::new(self.book.clone(), self.chapter, self.verse)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BibleTranslation {
    pub id: String,
    pub name: String,
    pub abbreviation: String,
    pub language: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerseComparison {
    pub address: VerseAddress,
    pub verses: Vec<BibleVerse>,
    pub unavailable: Vec<String>,
}

/// Body of `POST /api/ai-context`. Every field is optional on the wire so
/// missing fields surface as a 400 rather than a deserialization failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AiContextRequest {
    pub book: Option<String>,
    pub chapter: Option<u32>,
    pub verse: Option<u32>,
    #[serde(default)]
    pub persona: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AiContextResponse {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub persona: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LocateResponse {
    pub number: u32,
    pub address: VerseAddress,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RangeResponse {
    pub book: String,
    pub chapter: u32,
    pub start: u32,
    pub end: u32,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RandomVerseQuery {
    pub book: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchQuery {
    pub limit: Option<u32>,
}
