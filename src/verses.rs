use std::sync::Arc;

use rand::Rng;
use thiserror::Error;
use tokio::task::JoinSet;

use crate::canon::{find_book, BookSpec};
use crate::locator::VerseLocator;
use crate::models::{BibleVerse, VerseAddress, VerseComparison};
use crate::scripture_api::{find_translation, ScriptureClient, TranslationSpec, TRANSLATIONS};

/// Served when a random pick cannot be fetched.
const FALLBACK_BOOK: &str = "john";
const FALLBACK_CHAPTER: u32 = 3;
const FALLBACK_VERSE: u32 = 16;

#[derive(Debug, Error)]
pub enum VerseError {
    #[error("Translation '{0}' not found")]
    UnknownTranslation(String),
    #[error("Book '{0}' not found")]
    UnknownBook(String),
    #[error("Verse {0} not found")]
    UnknownVerse(VerseAddress),
    #[error("no verse beyond {0} in that direction")]
    EndOfCanon(VerseAddress),
    #[error("Search query is required")]
    EmptyQuery,
    #[error(transparent)]
    Upstream(#[from] anyhow::Error),
}

pub type VerseResult<T> = std::result::Result<T, VerseError>;

/// Which way to step from a verse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

/// Verse lookups that combine the locator with live text from API.Bible.
#[derive(Clone)]
pub struct VerseService {
    locator: Arc<VerseLocator>,
    scripture: ScriptureClient,
}

impl VerseService {
    pub fn new(locator: Arc<VerseLocator>, scripture: ScriptureClient) -> Self {
        Self { locator, scripture }
    }

    pub fn locator(&self) -> &VerseLocator {
        &self.locator
    }

    pub fn translation(&self, key: &str) -> VerseResult<&'static TranslationSpec> {
        find_translation(key).ok_or_else(|| VerseError::UnknownTranslation(key.to_string()))
    }

    pub fn book(&self, key: &str) -> VerseResult<&'static BookSpec> {
        find_book(key)
            .filter(|book| self.locator.contains_book(book.id))
            .ok_or_else(|| VerseError::UnknownBook(key.to_string()))
    }

    /// Normalise a user supplied address to canon ids and check it exists.
    pub fn resolve(&self, book: &str, chapter: u32, verse: u32) -> VerseResult<VerseAddress> {
        let spec = self.book(book)?;
        let address = VerseAddress::new(spec.id, chapter, verse);
        if !self.locator.contains(&address) {
            return Err(VerseError::UnknownVerse(address));
        }
        Ok(address)
    }

    pub async fn fetch(
        &self,
        translation: &str,
        address: &VerseAddress,
    ) -> VerseResult<BibleVerse> {
        let translation = self.translation(translation)?;
        let address = self.resolve(&address.book, address.chapter, address.verse)?;
        self.fetch_resolved(translation, &address).await
    }

    async fn fetch_resolved(
        &self,
        translation: &TranslationSpec,
        address: &VerseAddress,
    ) -> VerseResult<BibleVerse> {
        let book = self.book(&address.book)?;
        let verse = self
            .scripture
            .get_verse(translation, book, address.chapter, address.verse)
            .await?;
        Ok(verse)
    }

    pub async fn neighbor(
        &self,
        translation: &str,
        address: &VerseAddress,
        direction: Direction,
    ) -> VerseResult<BibleVerse> {
        let translation = self.translation(translation)?;
        let address = self.resolve(&address.book, address.chapter, address.verse)?;
        let target = match direction {
            Direction::Next => self.locator.next(&address),
            Direction::Previous => self.locator.previous(&address),
        }
        .ok_or(VerseError::EndOfCanon(address))?;
        self.fetch_resolved(translation, &target).await
    }

    /// Uniformly random verse, optionally restricted to one book. Falls back
    /// to John 3:16 when the chosen verse cannot be fetched.
    pub async fn random(&self, translation: &str, book: Option<&str>) -> VerseResult<BibleVerse> {
        let translation = self.translation(translation)?;
        let address = {
            let mut rng = rand::thread_rng();
            self.pick_random(&mut rng, book)?
        };
        tracing::info!("selected random verse {}", address);

        match self.fetch_resolved(translation, &address).await {
            Ok(verse) => Ok(verse),
            Err(err) => {
                tracing::warn!(
                    "random verse {} unavailable in {}: {}; falling back to John 3:16",
                    address,
                    translation.id,
                    err
                );
                let fallback = VerseAddress::new(FALLBACK_BOOK, FALLBACK_CHAPTER, FALLBACK_VERSE);
                self.fetch_resolved(translation, &fallback).await
            }
        }
    }

    fn pick_random<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        book: Option<&str>,
    ) -> VerseResult<VerseAddress> {
        match book {
            Some(key) => {
                let spec = self.book(key)?;
                self.locator
                    .random_in_book(rng, spec.id)
                    .ok_or_else(|| VerseError::UnknownBook(key.to_string()))
            }
            None => Ok(self.locator.random(rng)),
        }
    }

    /// Fetch one verse in every supported translation at once.
    pub async fn compare(&self, address: &VerseAddress) -> VerseResult<VerseComparison> {
        let address = self.resolve(&address.book, address.chapter, address.verse)?;

        let mut tasks = JoinSet::new();
        for translation in TRANSLATIONS {
            let service = self.clone();
            let address = address.clone();
            tasks.spawn(async move {
                let result = service.fetch_resolved(translation, &address).await;
                (translation.id, result)
            });
        }

        let mut verses = Vec::new();
        let mut unavailable = Vec::new();
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((_, Ok(verse))) => verses.push(verse),
                Ok((id, Err(err))) => {
                    tracing::warn!("{} unavailable in {}: {}", address, id, err);
                    unavailable.push(id.to_string());
                }
                Err(err) => tracing::error!("comparison task failed: {}", err),
            }
        }

        let order = |id: &str| TRANSLATIONS.iter().position(|t| t.id == id);
        verses.sort_by_key(|verse| order(verse.translation.as_str()));
        unavailable.sort_by_key(|id| order(id.as_str()));

        Ok(VerseComparison {
            address,
            verses,
            unavailable,
        })
    }

    pub async fn search(
        &self,
        translation: &str,
        query: &str,
        limit: u32,
    ) -> VerseResult<Vec<BibleVerse>> {
        let translation = self.translation(translation)?;
        let query = query.trim();
        if query.is_empty() {
            return Err(VerseError::EmptyQuery);
        }
        let verses = self.scripture.search(translation, query, limit).await?;
        Ok(verses)
    }
}
