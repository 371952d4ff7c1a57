use std::net::SocketAddr;
use std::path::Path as FsPath;

use anyhow::Result;
use askama::Template;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Json};
use axum::routing::{get, post};
use axum::Router;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::canon::{Testament, BOOKS};
use crate::config::AppConfig;
use crate::context::ContextService;
use crate::models::{
    AiContextRequest, AiContextResponse, BibleBook, BibleTranslation, BibleVerse,
    LocateResponse, RandomVerseQuery, RangeResponse, SearchQuery, VerseAddress, VerseComparison,
};
use crate::scripture_api::{DEFAULT_SEARCH_LIMIT, TRANSLATIONS};
use crate::verses::{Direction, VerseError, VerseService};

#[derive(Clone)]
pub struct AppState {
    verses: VerseService,
    context: ContextService,
    default_translation: String,
}

impl AppState {
    pub fn new(
        verses: VerseService,
        context: ContextService,
        default_translation: impl Into<String>,
    ) -> Self {
        Self {
            verses,
            context,
            default_translation: default_translation.into(),
        }
    }
}

pub async fn run_server(
    config: AppConfig,
    verses: VerseService,
    context: ContextService,
) -> Result<()> {
    let state = AppState::new(verses, context, config.scripture.default_translation.clone());
    let app = build_router(state, &config.static_dir);

    let addr: SocketAddr = config.bind_addr.parse()?;
    tracing::info!("listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

pub fn build_router(state: AppState, static_dir: impl AsRef<FsPath>) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/api/translations", get(list_translations))
        .route("/api/books", get(list_books))
        .route("/api/books/:translation", get(list_books_for_translation))
        .route("/api/chapters/:book", get(list_chapters))
        .route("/api/verses/:book/:chapter", get(list_verses))
        .route(
            "/api/verse/:translation/:book/:chapter/:verse",
            get(get_verse),
        )
        .route(
            "/api/next/:translation/:book/:chapter/:verse",
            get(next_verse),
        )
        .route(
            "/api/previous/:translation/:book/:chapter/:verse",
            get(previous_verse),
        )
        .route("/api/compare/:book/:chapter/:verse", get(compare_verse))
        .route("/api/random-verse", get(random_verse))
        .route("/api/random-verse/:translation", get(random_verse_in))
        .route("/api/search/:translation/:query", get(search_verses))
        .route("/api/locate/:number", get(locate_verse))
        .route("/api/range/:book/:chapter", get(chapter_range))
        .route("/api/ai-context", post(ai_context))
        .nest_service("/static", ServeDir::new(static_dir.as_ref()))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

struct BookSection {
    title: &'static str,
    books: Vec<BibleBook>,
}

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {
    sections: Vec<BookSection>,
    translations: Vec<BibleTranslation>,
    default_translation: String,
}

async fn index_page(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let books = canon_books(&state);
    let sections = [
        (Testament::Old, "Old Testament"),
        (Testament::New, "New Testament"),
        (Testament::Deuterocanonical, "Deuterocanonical"),
    ]
    .into_iter()
    .map(|(testament, title)| BookSection {
        title,
        books: books
            .iter()
            .filter(|book| book.testament == testament)
            .cloned()
            .collect(),
    })
    .filter(|section| !section.books.is_empty())
    .collect();

    let template = IndexTemplate {
        sections,
        translations: translations(),
        default_translation: state.default_translation.clone(),
    };
    let body = template.render()?;

    Ok(Html(body))
}

fn canon_books(state: &AppState) -> Vec<BibleBook> {
    let locator = state.verses.locator();
    BOOKS
        .iter()
        .filter(|book| locator.contains_book(book.id))
        .map(|book| book.to_book())
        .collect()
}

fn translations() -> Vec<BibleTranslation> {
    TRANSLATIONS.iter().map(|t| t.to_translation()).collect()
}

async fn list_translations() -> Json<Vec<BibleTranslation>> {
    Json(translations())
}

async fn list_books(State(state): State<AppState>) -> Json<Vec<BibleBook>> {
    Json(canon_books(&state))
}

async fn list_books_for_translation(
    State(state): State<AppState>,
    Path(translation): Path<String>,
) -> Result<Json<Vec<BibleBook>>, ApiError> {
    state.verses.translation(&translation)?;
    Ok(Json(canon_books(&state)))
}

async fn list_chapters(
    State(state): State<AppState>,
    Path(book): Path<String>,
) -> Result<Json<Vec<u32>>, ApiError> {
    let chapters = state
        .verses
        .book(&book)
        .ok()
        .and_then(|spec| state.verses.locator().chapters(spec.id));
    match chapters {
        Some(chapters) => Ok(Json(chapters)),
        None => Err(ApiError::not_found("Book not found")),
    }
}

async fn list_verses(
    State(state): State<AppState>,
    Path((book, chapter)): Path<(String, String)>,
) -> Result<Json<Vec<u32>>, ApiError> {
    let verses = chapter
        .parse::<u32>()
        .ok()
        .zip(state.verses.book(&book).ok())
        .and_then(|(chapter, spec)| state.verses.locator().verses(spec.id, chapter));
    match verses {
        Some(verses) => Ok(Json(verses)),
        None => Err(ApiError::not_found("Book chapter not found")),
    }
}

async fn get_verse(
    State(state): State<AppState>,
    Path((translation, book, chapter, verse)): Path<(String, String, String, String)>,
) -> Result<Json<BibleVerse>, ApiError> {
    let address = address_from_path(book, &chapter, &verse)?;
    let verse = state.verses.fetch(&translation, &address).await?;
    Ok(Json(verse))
}

async fn next_verse(
    State(state): State<AppState>,
    Path((translation, book, chapter, verse)): Path<(String, String, String, String)>,
) -> Result<Json<BibleVerse>, ApiError> {
    let address = address_from_path(book, &chapter, &verse)?;
    let verse = state
        .verses
        .neighbor(&translation, &address, Direction::Next)
        .await?;
    Ok(Json(verse))
}

async fn previous_verse(
    State(state): State<AppState>,
    Path((translation, book, chapter, verse)): Path<(String, String, String, String)>,
) -> Result<Json<BibleVerse>, ApiError> {
    let address = address_from_path(book, &chapter, &verse)?;
    let verse = state
        .verses
        .neighbor(&translation, &address, Direction::Previous)
        .await?;
    Ok(Json(verse))
}

async fn compare_verse(
    State(state): State<AppState>,
    Path((book, chapter, verse)): Path<(String, String, String)>,
) -> Result<Json<VerseComparison>, ApiError> {
    let address = address_from_path(book, &chapter, &verse)?;
    let comparison = state.verses.compare(&address).await?;
    Ok(Json(comparison))
}

/// Segments that are not verse numbers name no verse, so they are a 404
/// like any other unknown address.
fn address_from_path(book: String, chapter: &str, verse: &str) -> Result<VerseAddress, ApiError> {
    match (chapter.parse(), verse.parse()) {
        (Ok(chapter), Ok(verse)) => Ok(VerseAddress::new(book, chapter, verse)),
        _ => Err(ApiError::not_found(format!("Verse {book} {chapter}:{verse} not found"))),
    }
}

async fn random_verse(
    State(state): State<AppState>,
    query: Result<Query<RandomVerseQuery>, QueryRejection>,
) -> Result<Json<BibleVerse>, ApiError> {
    let Query(query) = query?;
    let verse = state
        .verses
        .random(&state.default_translation, query.book.as_deref())
        .await?;
    Ok(Json(verse))
}

async fn random_verse_in(
    State(state): State<AppState>,
    Path(translation): Path<String>,
    query: Result<Query<RandomVerseQuery>, QueryRejection>,
) -> Result<Json<BibleVerse>, ApiError> {
    let Query(query) = query?;
    let verse = state
        .verses
        .random(&translation, query.book.as_deref())
        .await?;
    Ok(Json(verse))
}

async fn search_verses(
    State(state): State<AppState>,
    Path((translation, query)): Path<(String, String)>,
    params: Result<Query<SearchQuery>, QueryRejection>,
) -> Result<Json<Vec<BibleVerse>>, ApiError> {
    let Query(params) = params?;
    let limit = params.limit.unwrap_or(DEFAULT_SEARCH_LIMIT).clamp(1, 100);
    let verses = state
        .verses
        .search(&translation, &query, limit)
        .await
        .map_err(|err| match err {
            VerseError::Upstream(err) => {
                tracing::error!("scripture search failed: {:#}", err);
                ApiError::new(StatusCode::BAD_GATEWAY, format!("Failed to search verses: {err}"))
            }
            other => other.into(),
        })?;
    Ok(Json(verses))
}

async fn locate_verse(
    State(state): State<AppState>,
    Path(raw): Path<String>,
) -> Result<Json<LocateResponse>, ApiError> {
    let locator = state.verses.locator();
    let out_of_range = || {
        ApiError::not_found(format!(
            "verse number {raw} is outside 1..={}",
            locator.total_verses()
        ))
    };

    let number = raw.trim().parse::<i64>().map_err(|_| out_of_range())?;
    let address = locator.try_locate(number).map_err(|_| out_of_range())?;
    let number = locator.global_number(&address).ok_or_else(out_of_range)?;
    Ok(Json(LocateResponse { number, address }))
}

async fn chapter_range(
    State(state): State<AppState>,
    Path((book, chapter)): Path<(String, String)>,
) -> Result<Json<RangeResponse>, ApiError> {
    let not_found = || ApiError::not_found("Book chapter not found");
    let spec = state.verses.book(&book).map_err(|_| not_found())?;
    let chapter = chapter.parse::<u32>().map_err(|_| not_found())?;
    let span = state
        .verses
        .locator()
        .range(spec.id, chapter)
        .ok_or_else(not_found)?;

    Ok(Json(RangeResponse {
        book: spec.id.to_string(),
        chapter,
        start: span.start,
        end: span.end,
    }))
}

async fn ai_context(
    State(state): State<AppState>,
    payload: Result<Json<AiContextRequest>, JsonRejection>,
) -> Result<Json<AiContextResponse>, ApiError> {
    let Json(request) = payload?;
    let (Some(book), Some(chapter), Some(verse)) =
        (request.book.as_deref(), request.chapter, request.verse)
    else {
        return Err(ApiError::bad_request("Book, chapter, and verse are required"));
    };

    let address = state.verses.resolve(book, chapter, verse)?;
    if !state.context.is_configured() {
        return Err(ApiError::new(
            StatusCode::SERVICE_UNAVAILABLE,
            "AI context is not configured",
        ));
    }

    let spec = state.verses.book(&address.book)?;
    let response = state
        .context
        .explain(spec, address.chapter, address.verse, request.persona.as_deref())
        .await
        .map_err(|err| {
            tracing::error!("AI context for {} failed: {:#}", address, err);
            ApiError::new(StatusCode::BAD_GATEWAY, "Failed to generate AI context")
        })?;

    Ok(Json(response))
}

#[derive(Debug)]
struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }
}

impl From<VerseError> for ApiError {
    fn from(value: VerseError) -> Self {
        match value {
            VerseError::Upstream(err) => {
                tracing::error!("scripture request failed: {:#}", err);
                Self::new(StatusCode::BAD_GATEWAY, format!("Failed to fetch Bible verse: {err}"))
            }
            err @ VerseError::EmptyQuery => Self::bad_request(err.to_string()),
            other => Self::not_found(other.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(value: JsonRejection) -> Self {
        Self::new(value.status(), value.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(value: QueryRejection) -> Self {
        Self::new(value.status(), value.body_text())
    }
}

impl From<askama::Error> for ApiError {
    fn from(value: askama::Error) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: value.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let body = serde_json::json!({ "error": self.message });
        (self.status, Json(body)).into_response()
    }
}
