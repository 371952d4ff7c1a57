//! Bidirectional index between global verse numbers and
//! (book, chapter, verse) addresses.
//!
//! Every chapter of the canon owns a contiguous span of global numbers.
//! Spans are laid end to end in canonical order starting at 1, so the last
//! span ends at the total verse count and a lookup is a binary search over
//! the flattened span list.

use std::collections::HashMap;

use rand::Rng;
use thiserror::Error;

use crate::canon::BOOKS;
use crate::models::VerseAddress;

/// Inclusive range of global verse numbers. Never empty: `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    pub fn verse_count(&self) -> u32 {
        self.end - self.start + 1
    }

    pub fn contains(&self, number: u32) -> bool {
        self.start <= number && number <= self.end
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CanonError {
    #[error("canon table has no books")]
    Empty,
    #[error("book `{0}` appears more than once")]
    DuplicateBook(String),
    #[error("book `{0}` has no chapters")]
    EmptyBook(String),
    #[error("{book} chapter {chapter} has no verses")]
    EmptyChapter { book: String, chapter: u32 },
    #[error("canon holds more than {} verses", u32::MAX)]
    TooLarge,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LocateError {
    #[error("verse number {number} is outside 1..={total}")]
    OutOfRange { number: i64, total: u32 },
}

#[derive(Debug, Clone)]
struct ChapterSpan {
    book: usize,
    chapter: u32,
    span: Span,
}

#[derive(Debug, Clone)]
struct BookEntry {
    id: String,
    first_span: usize,
    chapter_count: u32,
}

#[derive(Debug, Clone)]
pub struct VerseLocator {
    books: Vec<BookEntry>,
    spans: Vec<ChapterSpan>,
    by_id: HashMap<String, usize>,
    total: u32,
}

impl VerseLocator {
    /// Index over the built-in canon.
    pub fn standard() -> Result<Self, CanonError> {
        Self::new(BOOKS.iter().map(|book| (book.id, book.chapters)))
    }

    /// Build an index from `(book id, verse count per chapter)` pairs given in
    /// canonical order.
    pub fn new<I, S, C>(books: I) -> Result<Self, CanonError>
    where
        I: IntoIterator<Item = (S, C)>,
        S: Into<String>,
        C: AsRef<[u32]>,
    {
        let mut entries = Vec::new();
        let mut spans = Vec::new();
        let mut by_id = HashMap::new();
        let mut next_start: u64 = 1;

        for (book_idx, (id, chapters)) in books.into_iter().enumerate() {
            let id: String = id.into();
            let chapters = chapters.as_ref();

            if by_id.contains_key(&id) {
                return Err(CanonError::DuplicateBook(id));
            }
            if chapters.is_empty() {
                return Err(CanonError::EmptyBook(id));
            }

            let first_span = spans.len();
            for (chapter_idx, &count) in chapters.iter().enumerate() {
                let chapter = u32::try_from(chapter_idx + 1).map_err(|_| CanonError::TooLarge)?;
                if count == 0 {
                    return Err(CanonError::EmptyChapter { book: id, chapter });
                }

                let end = next_start + u64::from(count) - 1;
                spans.push(ChapterSpan {
                    book: book_idx,
                    chapter,
                    span: Span {
                        start: u32::try_from(next_start).map_err(|_| CanonError::TooLarge)?,
                        end: u32::try_from(end).map_err(|_| CanonError::TooLarge)?,
                    },
                });
                next_start = end + 1;
            }

            by_id.insert(id.clone(), book_idx);
            entries.push(BookEntry {
                id,
                first_span,
                chapter_count: u32::try_from(chapters.len()).map_err(|_| CanonError::TooLarge)?,
            });
        }

        if entries.is_empty() {
            return Err(CanonError::Empty);
        }

        Ok(Self {
            books: entries,
            spans,
            by_id,
            total: u32::try_from(next_start - 1).map_err(|_| CanonError::TooLarge)?,
        })
    }

    pub fn total_verses(&self) -> u32 {
        self.total
    }

    pub fn book_ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.books.iter().map(|book| book.id.as_str())
    }

    pub fn contains_book(&self, book: &str) -> bool {
        self.by_id.contains_key(book)
    }

    /// First verse of the first book. Out-of-range lookups land here.
    pub fn default_address(&self) -> VerseAddress {
        VerseAddress::new(self.books[0].id.clone(), 1, 1)
    }

    /// Map a global verse number to its address.
    ///
    /// Total: numbers outside `1..=total_verses()` yield
    /// [`default_address`](Self::default_address) instead of an error, so a
    /// random integer from that interval always maps to a real verse. Use
    /// [`try_locate`](Self::try_locate) to reject bad input.
    pub fn locate(&self, number: i64) -> VerseAddress {
        self.try_locate(number).unwrap_or_else(|_| self.default_address())
    }

    pub fn try_locate(&self, number: i64) -> Result<VerseAddress, LocateError> {
        let n = u32::try_from(number)
            .ok()
            .filter(|n| (1..=self.total).contains(n))
            .ok_or(LocateError::OutOfRange {
                number,
                total: self.total,
            })?;

        // n <= total == last span's end, so the partition point is in bounds.
        let idx = self.spans.partition_point(|entry| entry.span.end < n);
        let entry = &self.spans[idx];

        Ok(VerseAddress::new(
            self.books[entry.book].id.clone(),
            entry.chapter,
            n - entry.span.start + 1,
        ))
    }

    /// Global span of one chapter, `None` for an unknown book or chapter.
    pub fn range(&self, book: &str, chapter: u32) -> Option<Span> {
        let entry = self.book(book)?;
        if chapter == 0 || chapter > entry.chapter_count {
            return None;
        }
        let idx = entry.first_span + (chapter - 1) as usize;
        Some(self.spans[idx].span)
    }

    pub fn book_span(&self, book: &str) -> Option<Span> {
        let entry = self.book(book)?;
        let first = self.spans[entry.first_span].span;
        let last = self.spans[entry.first_span + entry.chapter_count as usize - 1].span;
        Some(Span {
            start: first.start,
            end: last.end,
        })
    }

    pub fn chapter_count(&self, book: &str) -> Option<u32> {
        self.book(book).map(|entry| entry.chapter_count)
    }

    pub fn chapters(&self, book: &str) -> Option<Vec<u32>> {
        self.chapter_count(book).map(|count| (1..=count).collect())
    }

    pub fn verse_count(&self, book: &str, chapter: u32) -> Option<u32> {
        self.range(book, chapter).map(|span| span.verse_count())
    }

    pub fn verses(&self, book: &str, chapter: u32) -> Option<Vec<u32>> {
        self.verse_count(book, chapter).map(|count| (1..=count).collect())
    }

    /// Inverse of [`locate`](Self::locate).
    pub fn global_number(&self, address: &VerseAddress) -> Option<u32> {
        let span = self.range(&address.book, address.chapter)?;
        if address.verse == 0 || address.verse > span.verse_count() {
            return None;
        }
        Some(span.start + address.verse - 1)
    }

    pub fn contains(&self, address: &VerseAddress) -> bool {
        self.global_number(address).is_some()
    }

    /// The verse after `address`, crossing chapter and book boundaries.
    /// `None` after the last verse of the canon or for an invalid address.
    pub fn next(&self, address: &VerseAddress) -> Option<VerseAddress> {
        let n = self.global_number(address)?;
        if n >= self.total {
            return None;
        }
        self.try_locate(i64::from(n) + 1).ok()
    }

    pub fn previous(&self, address: &VerseAddress) -> Option<VerseAddress> {
        let n = self.global_number(address)?;
        if n <= 1 {
            return None;
        }
        self.try_locate(i64::from(n) - 1).ok()
    }

    /// Uniformly random verse over the whole canon.
    pub fn random<R: Rng + ?Sized>(&self, rng: &mut R) -> VerseAddress {
        self.locate(i64::from(rng.gen_range(1..=self.total)))
    }

    pub fn random_in_book<R: Rng + ?Sized>(&self, rng: &mut R, book: &str) -> Option<VerseAddress> {
        let span = self.book_span(book)?;
        Some(self.locate(i64::from(rng.gen_range(span.start..=span.end))))
    }

    /// Every chapter span in canonical order.
    pub fn spans(&self) -> impl Iterator<Item = (&str, u32, Span)> + '_ {
        self.spans
            .iter()
            .map(|entry| (self.books[entry.book].id.as_str(), entry.chapter, entry.span))
    }

    fn book(&self, book: &str) -> Option<&BookEntry> {
        self.by_id.get(book).map(|&idx| &self.books[idx])
    }
}
