use serde::{Deserialize, Serialize};

use crate::models::{BibleBook, VerseAddress};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Testament {
    Old,
    New,
    Deuterocanonical,
}

impl Testament {
    pub fn as_str(self) -> &'static str {
        match self {
            Testament::Old => "old",
            Testament::New => "new",
            Testament::Deuterocanonical => "deuterocanonical",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BookGroup {
    Law,
    History,
    Wisdom,
    Prophets,
    Gospels,
    Epistles,
    Apocalyptic,
    Deuterocanonical,
}

impl BookGroup {
    pub fn as_str(self) -> &'static str {
        match self {
            BookGroup::Law => "law",
            BookGroup::History => "history",
            BookGroup::Wisdom => "wisdom",
            BookGroup::Prophets => "prophets",
            BookGroup::Gospels => "gospels",
            BookGroup::Epistles => "epistles",
            BookGroup::Apocalyptic => "apocalyptic",
            BookGroup::Deuterocanonical => "deuterocanonical",
        }
    }
}

/// One book of the canon: identity, classification and the verse count of
/// every chapter, in chapter order.
#[derive(Debug)]
pub struct BookSpec {
    pub id: &'static str,
    pub name: &'static str,
    pub api_code: &'static str,
    pub testament: Testament,
    pub group: BookGroup,
    pub chapters: &'static [u32],
}

impl BookSpec {
    pub fn chapter_count(&self) -> u32 {
        self.chapters.len() as u32
    }

    pub fn verse_count(&self, chapter: u32) -> Option<u32> {
        let idx = usize::try_from(chapter).ok()?.checked_sub(1)?;
        self.chapters.get(idx).copied()
    }

    pub fn total_verses(&self) -> u32 {
        self.chapters.iter().sum()
    }

    pub fn to_book(&self) -> BibleBook {
        BibleBook {
            id: self.id.to_string(),
            name: self.name.to_string(),
            testament: self.testament,
            group: self.group,
        }
    }
}

const BOOK_ALIASES: &[(&str, &str)] = &[
    ("psalm", "psalms"),
    ("songofsongs", "songofsolomon"),
    ("canticles", "songofsolomon"),
    ("ecclesiasticus", "sirach"),
    ("revelations", "revelation"),
    ("apocalypse", "revelation"),
];

/// Resolve a book from its id (`1samuel`), display name (`1 Samuel`, any
/// case) or API.Bible code (`1SA`).
pub fn find_book(key: &str) -> Option<&'static BookSpec> {
    let normalized = normalize_book_key(key);
    if normalized.is_empty() {
        return None;
    }

    let target = BOOK_ALIASES
        .iter()
        .find(|(alias, _)| *alias == normalized)
        .map(|(_, id)| *id)
        .unwrap_or(normalized.as_str());

    BOOKS
        .iter()
        .find(|book| book.id == target || book.api_code.eq_ignore_ascii_case(target))
}

pub fn book_by_api_code(code: &str) -> Option<&'static BookSpec> {
    BOOKS
        .iter()
        .find(|book| book.api_code.eq_ignore_ascii_case(code.trim()))
}

/// Parse a human reference such as `John 3:16` or `1 John 2:3`.
///
/// Only the shape is checked here; whether the chapter and verse exist is up
/// to the locator.
pub fn parse_reference(input: &str) -> Option<VerseAddress> {
    let trimmed = input.trim();
    let (book_part, chapter_verse) = trimmed.rsplit_once(char::is_whitespace)?;
    let (chapter, verse) = chapter_verse.split_once(':')?;

    let book = find_book(book_part)?;
    let chapter: u32 = chapter.trim().parse().ok()?;
    let verse: u32 = verse.trim().parse().ok()?;
    if chapter == 0 || verse == 0 {
        return None;
    }

    Some(VerseAddress::new(book.id, chapter, verse))
}

fn normalize_book_key(key: &str) -> String {
    key.chars()
        .filter(|c| !c.is_whitespace() && *c != '.')
        .flat_map(char::to_lowercase)
        .collect()
}

/// Canonical book order: Old Testament, New Testament, then the
/// deuterocanonical books. Protestant books follow KJV versification.
pub static BOOKS: &[BookSpec] = &[
    BookSpec {
        id: "genesis",
        name: "Genesis",
        api_code: "GEN",
        testament: Testament::Old,
        group: BookGroup::Law,
        chapters: &[
            31, 25, 24, 26, 32, 22, 24, 22, 29, 32, 32, 20, 18, 24, 21, 16, 27, 33, 38, 18, 34,
            24, 20, 67, 34, 35, 46, 22, 35, 43, 55, 32, 20, 31, 29, 43, 36, 30, 23, 23, 57, 38,
            34, 34, 28, 34, 31, 22, 33, 26,
        ],
    },
    BookSpec {
        id: "exodus",
        name: "Exodus",
        api_code: "EXO",
        testament: Testament::Old,
        group: BookGroup::Law,
        chapters: &[
            22, 25, 22, 31, 23, 30, 25, 32, 35, 29, 10, 51, 22, 31, 27, 36, 16, 27, 25, 26, 36,
            31, 33, 18, 40, 37, 21, 43, 46, 38, 18, 35, 23, 35, 35, 38, 29, 31, 43, 38,
        ],
    },
    BookSpec {
        id: "leviticus",
        name: "Leviticus",
        api_code: "LEV",
        testament: Testament::Old,
        group: BookGroup::Law,
        chapters: &[
            17, 16, 17, 35, 19, 30, 38, 36, 24, 20, 47, 8, 59, 57, 33, 34, 16, 30, 37, 27, 24, 33,
            44, 23, 55, 46, 34,
        ],
    },
    BookSpec {
        id: "numbers",
        name: "Numbers",
        api_code: "NUM",
        testament: Testament::Old,
        group: BookGroup::Law,
        chapters: &[
            54, 34, 51, 49, 31, 27, 89, 26, 23, 36, 35, 16, 33, 45, 41, 50, 13, 32, 22, 29, 35,
            41, 30, 25, 18, 65, 23, 31, 40, 16, 54, 42, 56, 29, 34, 13,
        ],
    },
    BookSpec {
        id: "deuteronomy",
        name: "Deuteronomy",
        api_code: "DEU",
        testament: Testament::Old,
        group: BookGroup::Law,
        chapters: &[
            46, 37, 29, 49, 33, 25, 26, 20, 29, 22, 32, 32, 18, 29, 23, 22, 20, 22, 21, 20, 23,
            30, 25, 22, 19, 19, 26, 68, 29, 20, 30, 52, 29, 12,
        ],
    },
    BookSpec {
        id: "joshua",
        name: "Joshua",
        api_code: "JOS",
        testament: Testament::Old,
        group: BookGroup::History,
        chapters: &[
            18, 24, 17, 24, 15, 27, 26, 35, 27, 43, 23, 24, 33, 15, 63, 10, 18, 28, 51, 9, 45, 34,
            16, 33,
        ],
    },
    BookSpec {
        id: "judges",
        name: "Judges",
        api_code: "JDG",
        testament: Testament::Old,
        group: BookGroup::History,
        chapters: &[
            36, 23, 31, 24, 31, 40, 25, 35, 57, 18, 40, 15, 25, 20, 20, 31, 13, 31, 30, 48, 25,
        ],
    },
    BookSpec {
        id: "ruth",
        name: "Ruth",
        api_code: "RUT",
        testament: Testament::Old,
        group: BookGroup::History,
        chapters: &[22, 23, 18, 22],
    },
    BookSpec {
        id: "1samuel",
        name: "1 Samuel",
        api_code: "1SA",
        testament: Testament::Old,
        group: BookGroup::History,
        chapters: &[
            28, 36, 21, 22, 12, 21, 17, 22, 27, 27, 15, 25, 23, 52, 35, 23, 58, 30, 24, 42, 15,
            23, 29, 22, 44, 25, 12, 25, 11, 31, 13,
        ],
    },
    BookSpec {
        id: "2samuel",
        name: "2 Samuel",
        api_code: "2SA",
        testament: Testament::Old,
        group: BookGroup::History,
        chapters: &[
            27, 32, 39, 12, 25, 23, 29, 18, 13, 19, 27, 31, 39, 33, 37, 23, 29, 33, 43, 26, 22,
            51, 39, 25,
        ],
    },
    BookSpec {
        id: "1kings",
        name: "1 Kings",
        api_code: "1KI",
        testament: Testament::Old,
        group: BookGroup::History,
        chapters: &[
            53, 46, 28, 34, 18, 38, 51, 66, 28, 29, 43, 33, 34, 31, 34, 34, 24, 46, 21, 43, 29,
            53,
        ],
    },
    BookSpec {
        id: "2kings",
        name: "2 Kings",
        api_code: "2KI",
        testament: Testament::Old,
        group: BookGroup::History,
        chapters: &[
            18, 25, 27, 44, 27, 33, 20, 29, 37, 36, 21, 21, 25, 29, 38, 20, 41, 37, 37, 21, 26,
            20, 37, 20, 30,
        ],
    },
    BookSpec {
        id: "1chronicles",
        name: "1 Chronicles",
        api_code: "1CH",
        testament: Testament::Old,
        group: BookGroup::History,
        chapters: &[
            54, 55, 24, 43, 26, 81, 40, 40, 44, 14, 47, 40, 14, 17, 29, 43, 27, 17, 19, 8, 30, 19,
            32, 31, 31, 32, 34, 21, 30,
        ],
    },
    BookSpec {
        id: "2chronicles",
        name: "2 Chronicles",
        api_code: "2CH",
        testament: Testament::Old,
        group: BookGroup::History,
        chapters: &[
            17, 18, 17, 22, 14, 42, 22, 18, 31, 19, 23, 16, 22, 15, 19, 14, 19, 34, 11, 37, 20,
            12, 21, 27, 28, 23, 9, 27, 36, 27, 21, 33, 25, 33, 27, 23,
        ],
    },
    BookSpec {
        id: "ezra",
        name: "Ezra",
        api_code: "EZR",
        testament: Testament::Old,
        group: BookGroup::History,
        chapters: &[11, 70, 13, 24, 17, 22, 28, 36, 15, 44],
    },
    BookSpec {
        id: "nehemiah",
        name: "Nehemiah",
        api_code: "NEH",
        testament: Testament::Old,
        group: BookGroup::History,
        chapters: &[11, 20, 32, 23, 19, 19, 73, 18, 38, 39, 36, 47, 31],
    },
    BookSpec {
        id: "esther",
        name: "Esther",
        api_code: "EST",
        testament: Testament::Old,
        group: BookGroup::History,
        chapters: &[22, 23, 15, 17, 14, 14, 10, 17, 32, 3],
    },
    BookSpec {
        id: "job",
        name: "Job",
        api_code: "JOB",
        testament: Testament::Old,
        group: BookGroup::Wisdom,
        chapters: &[
            22, 13, 26, 21, 27, 30, 21, 22, 35, 22, 20, 25, 28, 22, 35, 22, 16, 21, 29, 29, 34,
            30, 17, 25, 6, 14, 23, 28, 25, 31, 40, 22, 33, 37, 16, 33, 24, 41, 30, 24, 34, 17,
        ],
    },
    BookSpec {
        id: "psalms",
        name: "Psalms",
        api_code: "PSA",
        testament: Testament::Old,
        group: BookGroup::Wisdom,
        chapters: &[
            6, 12, 8, 8, 12, 10, 17, 9, 20, 18, 7, 8, 6, 7, 5, 11, 15, 50, 14, 9, 13, 31, 6, 10,
            22, 12, 14, 9, 11, 12, 24, 11, 22, 22, 28, 12, 40, 22, 13, 17, 13, 11, 5, 26, 17, 11,
            9, 14, 20, 23, 19, 9, 6, 7, 23, 13, 11, 11, 17, 12, 8, 12, 11, 10, 13, 20, 7, 35, 36,
            5, 24, 20, 28, 23, 10, 12, 20, 72, 13, 19, 16, 8, 18, 12, 13, 17, 7, 18, 52, 17, 16,
            15, 5, 23, 11, 13, 12, 9, 9, 5, 8, 28, 22, 35, 45, 48, 43, 13, 31, 7, 10, 10, 9, 8,
            18, 19, 2, 29, 176, 7, 8, 9, 4, 8, 5, 6, 5, 6, 8, 8, 3, 18, 3, 3, 21, 26, 9, 8, 24,
            13, 10, 7, 12, 15, 21, 10, 20, 14, 9, 6,
        ],
    },
    BookSpec {
        id: "proverbs",
        name: "Proverbs",
        api_code: "PRO",
        testament: Testament::Old,
        group: BookGroup::Wisdom,
        chapters: &[
            33, 22, 35, 27, 23, 35, 27, 36, 18, 32, 31, 28, 25, 35, 33, 33, 28, 24, 29, 30, 31,
            29, 35, 34, 28, 28, 27, 28, 27, 33, 31,
        ],
    },
    BookSpec {
        id: "ecclesiastes",
        name: "Ecclesiastes",
        api_code: "ECC",
        testament: Testament::Old,
        group: BookGroup::Wisdom,
        chapters: &[18, 26, 22, 16, 20, 12, 29, 17, 18, 20, 10, 14],
    },
    BookSpec {
        id: "songofsolomon",
        name: "Song of Solomon",
        api_code: "SNG",
        testament: Testament::Old,
        group: BookGroup::Wisdom,
        chapters: &[17, 17, 11, 16, 16, 13, 13, 14],
    },
    BookSpec {
        id: "isaiah",
        name: "Isaiah",
        api_code: "ISA",
        testament: Testament::Old,
        group: BookGroup::Prophets,
        chapters: &[
            31, 22, 26, 6, 30, 13, 25, 22, 21, 34, 16, 6, 22, 32, 9, 14, 14, 7, 25, 6, 17, 25, 18,
            23, 12, 21, 13, 29, 24, 33, 9, 20, 24, 17, 10, 22, 38, 22, 8, 31, 29, 25, 28, 28, 25,
            13, 15, 22, 26, 11, 23, 15, 12, 17, 13, 12, 21, 14, 21, 22, 11, 12, 19, 12, 25, 24,
        ],
    },
    BookSpec {
        id: "jeremiah",
        name: "Jeremiah",
        api_code: "JER",
        testament: Testament::Old,
        group: BookGroup::Prophets,
        chapters: &[
            19, 37, 25, 31, 31, 30, 34, 22, 26, 25, 23, 17, 27, 22, 21, 21, 27, 23, 15, 18, 14,
            30, 40, 10, 38, 24, 22, 17, 32, 24, 40, 44, 26, 22, 19, 32, 21, 28, 18, 16, 18, 22,
            13, 30, 5, 28, 7, 47, 39, 46, 64, 34,
        ],
    },
    BookSpec {
        id: "lamentations",
        name: "Lamentations",
        api_code: "LAM",
        testament: Testament::Old,
        group: BookGroup::Prophets,
        chapters: &[22, 22, 66, 22, 22],
    },
    BookSpec {
        id: "ezekiel",
        name: "Ezekiel",
        api_code: "EZK",
        testament: Testament::Old,
        group: BookGroup::Prophets,
        chapters: &[
            28, 10, 27, 17, 17, 14, 27, 18, 11, 22, 25, 28, 23, 23, 8, 63, 24, 32, 14, 49, 32, 31,
            49, 27, 17, 21, 36, 26, 21, 26, 18, 32, 33, 31, 15, 38, 28, 23, 29, 49, 26, 20, 27,
            31, 25, 24, 23, 35,
        ],
    },
    BookSpec {
        id: "daniel",
        name: "Daniel",
        api_code: "DAN",
        testament: Testament::Old,
        group: BookGroup::Prophets,
        chapters: &[21, 49, 30, 37, 31, 28, 28, 27, 27, 21, 45, 13],
    },
    BookSpec {
        id: "hosea",
        name: "Hosea",
        api_code: "HOS",
        testament: Testament::Old,
        group: BookGroup::Prophets,
        chapters: &[11, 23, 5, 19, 15, 11, 16, 14, 17, 15, 12, 14, 16, 9],
    },
    BookSpec {
        id: "joel",
        name: "Joel",
        api_code: "JOL",
        testament: Testament::Old,
        group: BookGroup::Prophets,
        chapters: &[20, 32, 21],
    },
    BookSpec {
        id: "amos",
        name: "Amos",
        api_code: "AMO",
        testament: Testament::Old,
        group: BookGroup::Prophets,
        chapters: &[15, 16, 15, 13, 27, 14, 17, 14, 15],
    },
    BookSpec {
        id: "obadiah",
        name: "Obadiah",
        api_code: "OBA",
        testament: Testament::Old,
        group: BookGroup::Prophets,
        chapters: &[21],
    },
    BookSpec {
        id: "jonah",
        name: "Jonah",
        api_code: "JON",
        testament: Testament::Old,
        group: BookGroup::Prophets,
        chapters: &[17, 10, 10, 11],
    },
    BookSpec {
        id: "micah",
        name: "Micah",
        api_code: "MIC",
        testament: Testament::Old,
        group: BookGroup::Prophets,
        chapters: &[16, 13, 12, 13, 15, 16, 20],
    },
    BookSpec {
        id: "nahum",
        name: "Nahum",
        api_code: "NAM",
        testament: Testament::Old,
        group: BookGroup::Prophets,
        chapters: &[15, 13, 19],
    },
    BookSpec {
        id: "habakkuk",
        name: "Habakkuk",
        api_code: "HAB",
        testament: Testament::Old,
        group: BookGroup::Prophets,
        chapters: &[17, 20, 19],
    },
    BookSpec {
        id: "zephaniah",
        name: "Zephaniah",
        api_code: "ZEP",
        testament: Testament::Old,
        group: BookGroup::Prophets,
        chapters: &[18, 15, 20],
    },
    BookSpec {
        id: "haggai",
        name: "Haggai",
        api_code: "HAG",
        testament: Testament::Old,
        group: BookGroup::Prophets,
        chapters: &[15, 23],
    },
    BookSpec {
        id: "zechariah",
        name: "Zechariah",
        api_code: "ZEC",
        testament: Testament::Old,
        group: BookGroup::Prophets,
        chapters: &[21, 13, 10, 14, 11, 15, 14, 23, 17, 12, 17, 14, 9, 21],
    },
    BookSpec {
        id: "malachi",
        name: "Malachi",
        api_code: "MAL",
        testament: Testament::Old,
        group: BookGroup::Prophets,
        chapters: &[14, 17, 18, 6],
    },
    BookSpec {
        id: "matthew",
        name: "Matthew",
        api_code: "MAT",
        testament: Testament::New,
        group: BookGroup::Gospels,
        chapters: &[
            25, 23, 17, 25, 48, 34, 29, 34, 38, 42, 30, 50, 58, 36, 39, 28, 27, 35, 30, 34, 46,
            46, 39, 51, 46, 75, 66, 20,
        ],
    },
    BookSpec {
        id: "mark",
        name: "Mark",
        api_code: "MRK",
        testament: Testament::New,
        group: BookGroup::Gospels,
        chapters: &[45, 28, 35, 41, 43, 56, 37, 38, 50, 52, 33, 44, 37, 72, 47, 20],
    },
    BookSpec {
        id: "luke",
        name: "Luke",
        api_code: "LUK",
        testament: Testament::New,
        group: BookGroup::Gospels,
        chapters: &[
            80, 52, 38, 44, 39, 49, 50, 56, 62, 42, 54, 59, 35, 35, 32, 31, 37, 43, 48, 47, 38,
            71, 56, 53,
        ],
    },
    BookSpec {
        id: "john",
        name: "John",
        api_code: "JHN",
        testament: Testament::New,
        group: BookGroup::Gospels,
        chapters: &[
            51, 25, 36, 54, 47, 71, 53, 59, 41, 42, 57, 50, 38, 31, 27, 33, 26, 40, 42, 31, 25,
        ],
    },
    BookSpec {
        id: "acts",
        name: "Acts",
        api_code: "ACT",
        testament: Testament::New,
        group: BookGroup::History,
        chapters: &[
            26, 47, 26, 37, 42, 15, 60, 40, 43, 48, 30, 25, 52, 28, 41, 40, 34, 28, 41, 38, 40,
            30, 35, 27, 27, 32, 44, 31,
        ],
    },
    BookSpec {
        id: "romans",
        name: "Romans",
        api_code: "ROM",
        testament: Testament::New,
        group: BookGroup::Epistles,
        chapters: &[32, 29, 31, 25, 21, 23, 25, 39, 33, 21, 36, 21, 14, 23, 33, 27],
    },
    BookSpec {
        id: "1corinthians",
        name: "1 Corinthians",
        api_code: "1CO",
        testament: Testament::New,
        group: BookGroup::Epistles,
        chapters: &[31, 16, 23, 21, 13, 20, 40, 13, 27, 33, 34, 31, 13, 40, 58, 24],
    },
    BookSpec {
        id: "2corinthians",
        name: "2 Corinthians",
        api_code: "2CO",
        testament: Testament::New,
        group: BookGroup::Epistles,
        chapters: &[24, 17, 18, 18, 21, 18, 16, 24, 15, 18, 33, 21, 14],
    },
    BookSpec {
        id: "galatians",
        name: "Galatians",
        api_code: "GAL",
        testament: Testament::New,
        group: BookGroup::Epistles,
        chapters: &[24, 21, 29, 31, 26, 18],
    },
    BookSpec {
        id: "ephesians",
        name: "Ephesians",
        api_code: "EPH",
        testament: Testament::New,
        group: BookGroup::Epistles,
        chapters: &[23, 22, 21, 32, 33, 24],
    },
    BookSpec {
        id: "philippians",
        name: "Philippians",
        api_code: "PHP",
        testament: Testament::New,
        group: BookGroup::Epistles,
        chapters: &[30, 30, 21, 23],
    },
    BookSpec {
        id: "colossians",
        name: "Colossians",
        api_code: "COL",
        testament: Testament::New,
        group: BookGroup::Epistles,
        chapters: &[29, 23, 25, 18],
    },
    BookSpec {
        id: "1thessalonians",
        name: "1 Thessalonians",
        api_code: "1TH",
        testament: Testament::New,
        group: BookGroup::Epistles,
        chapters: &[10, 20, 13, 18, 28],
    },
    BookSpec {
        id: "2thessalonians",
        name: "2 Thessalonians",
        api_code: "2TH",
        testament: Testament::New,
        group: BookGroup::Epistles,
        chapters: &[12, 17, 18],
    },
    BookSpec {
        id: "1timothy",
        name: "1 Timothy",
        api_code: "1TI",
        testament: Testament::New,
        group: BookGroup::Epistles,
        chapters: &[20, 15, 16, 16, 25, 21],
    },
    BookSpec {
        id: "2timothy",
        name: "2 Timothy",
        api_code: "2TI",
        testament: Testament::New,
        group: BookGroup::Epistles,
        chapters: &[18, 26, 17, 22],
    },
    BookSpec {
        id: "titus",
        name: "Titus",
        api_code: "TIT",
        testament: Testament::New,
        group: BookGroup::Epistles,
        chapters: &[16, 15, 15],
    },
    BookSpec {
        id: "philemon",
        name: "Philemon",
        api_code: "PHM",
        testament: Testament::New,
        group: BookGroup::Epistles,
        chapters: &[25],
    },
    BookSpec {
        id: "hebrews",
        name: "Hebrews",
        api_code: "HEB",
        testament: Testament::New,
        group: BookGroup::Epistles,
        chapters: &[14, 18, 19, 16, 14, 20, 28, 13, 28, 39, 40, 29, 25],
    },
    BookSpec {
        id: "james",
        name: "James",
        api_code: "JAS",
        testament: Testament::New,
        group: BookGroup::Epistles,
        chapters: &[27, 26, 18, 17, 20],
    },
    BookSpec {
        id: "1peter",
        name: "1 Peter",
        api_code: "1PE",
        testament: Testament::New,
        group: BookGroup::Epistles,
        chapters: &[25, 25, 22, 19, 14],
    },
    BookSpec {
        id: "2peter",
        name: "2 Peter",
        api_code: "2PE",
        testament: Testament::New,
        group: BookGroup::Epistles,
        chapters: &[21, 22, 18],
    },
    BookSpec {
        id: "1john",
        name: "1 John",
        api_code: "1JN",
        testament: Testament::New,
        group: BookGroup::Epistles,
        chapters: &[10, 29, 24, 21, 21],
    },
    BookSpec {
        id: "2john",
        name: "2 John",
        api_code: "2JN",
        testament: Testament::New,
        group: BookGroup::Epistles,
        chapters: &[13],
    },
    BookSpec {
        id: "3john",
        name: "3 John",
        api_code: "3JN",
        testament: Testament::New,
        group: BookGroup::Epistles,
        chapters: &[14],
    },
    BookSpec {
        id: "jude",
        name: "Jude",
        api_code: "JUD",
        testament: Testament::New,
        group: BookGroup::Epistles,
        chapters: &[25],
    },
    BookSpec {
        id: "revelation",
        name: "Revelation",
        api_code: "REV",
        testament: Testament::New,
        group: BookGroup::Apocalyptic,
        chapters: &[
            20, 29, 22, 11, 14, 17, 17, 13, 21, 11, 19, 17, 18, 20, 8, 21, 18, 24, 21, 15, 27, 21,
        ],
    },
    BookSpec {
        id: "tobit",
        name: "Tobit",
        api_code: "TOB",
        testament: Testament::Deuterocanonical,
        group: BookGroup::Deuterocanonical,
        chapters: &[22, 14, 17, 21, 23, 18, 18, 21, 6, 13, 19, 22, 18, 15],
    },
    BookSpec {
        id: "judith",
        name: "Judith",
        api_code: "JDT",
        testament: Testament::Deuterocanonical,
        group: BookGroup::Deuterocanonical,
        chapters: &[16, 28, 10, 15, 24, 21, 32, 36, 14, 23, 23, 20, 20, 19, 14, 25],
    },
    BookSpec {
        id: "wisdom",
        name: "Wisdom",
        api_code: "WIS",
        testament: Testament::Deuterocanonical,
        group: BookGroup::Deuterocanonical,
        chapters: &[16, 24, 19, 20, 23, 25, 30, 21, 18, 21, 26, 27, 19, 31, 19, 29, 21, 25, 22],
    },
    BookSpec {
        id: "sirach",
        name: "Sirach",
        api_code: "SIR",
        testament: Testament::Deuterocanonical,
        group: BookGroup::Deuterocanonical,
        chapters: &[
            30, 18, 31, 31, 15, 37, 36, 19, 18, 31, 34, 18, 26, 27, 20, 30, 32, 33, 30, 31, 28,
            27, 27, 34, 26, 29, 30, 26, 28, 25, 31, 24, 33, 31, 26, 31, 31, 34, 35, 30, 24, 25,
            33, 23, 26, 20, 25, 25, 16, 29, 30,
        ],
    },
    BookSpec {
        id: "baruch",
        name: "Baruch",
        api_code: "BAR",
        testament: Testament::Deuterocanonical,
        group: BookGroup::Deuterocanonical,
        chapters: &[22, 35, 37, 37, 9, 73],
    },
    BookSpec {
        id: "1maccabees",
        name: "1 Maccabees",
        api_code: "1MA",
        testament: Testament::Deuterocanonical,
        group: BookGroup::Deuterocanonical,
        chapters: &[64, 70, 60, 61, 68, 63, 50, 32, 73, 89, 74, 53, 53, 49, 41, 24],
    },
    BookSpec {
        id: "2maccabees",
        name: "2 Maccabees",
        api_code: "2MA",
        testament: Testament::Deuterocanonical,
        group: BookGroup::Deuterocanonical,
        chapters: &[36, 32, 40, 50, 27, 31, 42, 36, 29, 38, 38, 45, 26, 46, 39],
    },
];
