//! Drives the full router against in-process fakes of API.Bible and Gemini.

use std::collections::HashMap;
use std::sync::Arc;

use axum::body::Body;
use axum::extract::{Path, Query, State};
use axum::http::{header, HeaderMap, Request, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tokio::sync::Semaphore;
use tower::ServiceExt;

use verse_explorer::context::ContextService;
use verse_explorer::gemini::GeminiClient;
use verse_explorer::scripture_api::ScriptureClient;
use verse_explorer::verses::VerseService;
use verse_explorer::{build_router, AppState, VerseLocator};

const SCRIPTURE_KEY: &str = "test-scripture-key";
const GEMINI_KEY: &str = "test-gemini-key";
const DRA_BIBLE_ID: &str = "179568874c45066f-01";

#[derive(Clone, Default)]
struct FakeScripture {
    /// When set, every other verse id answers 404.
    only_verse: Option<&'static str>,
    /// Bible id that answers 503 for everything.
    broken_bible: Option<&'static str>,
}

async fn fake_verse(
    State(fake): State<FakeScripture>,
    Path((bible, verse_id)): Path<(String, String)>,
    headers: HeaderMap,
) -> axum::response::Response {
    if headers.get("api-key").and_then(|v| v.to_str().ok()) != Some(SCRIPTURE_KEY) {
        return (StatusCode::UNAUTHORIZED, Json(json!({ "message": "bad key" }))).into_response();
    }
    if fake.broken_bible == Some(bible.as_str()) {
        return (StatusCode::SERVICE_UNAVAILABLE, "").into_response();
    }
    if fake.only_verse.is_some_and(|only| only != verse_id) {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({ "statusCode": 404, "error": "Not Found", "message": "Verse not found" })),
        )
            .into_response();
    }

    let number = verse_id.rsplit('.').next().unwrap_or_default().to_string();
    let content = if verse_id == "JHN.3.16" {
        format!("<p>{number} For God so loved the world</p>")
    } else {
        format!("<p>{number} text of {verse_id} in {bible}</p>")
    };
    Json(json!({ "data": { "id": verse_id, "content": content } })).into_response()
}

async fn fake_search(
    State(fake): State<FakeScripture>,
    Path(bible): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> axum::response::Response {
    if fake.broken_bible == Some(bible.as_str()) {
        return (StatusCode::SERVICE_UNAVAILABLE, "").into_response();
    }
    assert_eq!(params.get("query").map(String::as_str), Some("love"));
    assert_eq!(params.get("limit").map(String::as_str), Some("5"));
    Json(json!({
        "data": {
            "query": "love",
            "verses": [
                { "id": "JHN.3.16", "text": "For God so loved the world" },
                { "id": "XYZ.1.1", "text": "unknown book" },
                { "id": "1JN.4.8", "text": "8 God is love." }
            ]
        }
    }))
    .into_response()
}

async fn spawn_scripture(fake: FakeScripture) -> String {
    let app = Router::new()
        .route("/bibles/:bible/verses/:verse_id", get(fake_verse))
        .route("/bibles/:bible/search", get(fake_search))
        .with_state(fake);
    spawn(app).await
}

async fn fake_generate(
    Path(_model): Path<String>,
    Query(params): Query<HashMap<String, String>>,
    Json(body): Json<Value>,
) -> axum::response::Response {
    if params.get("key").map(String::as_str) != Some(GEMINI_KEY) {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": { "code": 400, "message": "API key not valid" } })),
        )
            .into_response();
    }
    assert_eq!(body["generationConfig"]["maxOutputTokens"], 250);
    let prompt = body["contents"][0]["parts"][0]["text"].as_str().unwrap_or_default();
    let text = if prompt.starts_with("Speaking as") {
        "Ruth binds herself to Naomi, a convert's vow."
    } else {
        "Ruth chooses Naomi's people and God."
    };
    Json(json!({ "candidates": [{ "content": { "parts": [{ "text": text }] } }] }))
        .into_response()
}

async fn spawn_gemini() -> String {
    let app = Router::new().route("/models/:model", post(fake_generate));
    spawn(app).await
}

async fn spawn(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind fake upstream");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("fake upstream");
    });
    format!("http://{addr}")
}

struct TestApp {
    router: Router,
}

impl TestApp {
    async fn with(fake: FakeScripture, gemini_key: Option<&str>) -> Self {
        let scripture_url = spawn_scripture(fake).await;
        let gemini_url = spawn_gemini().await;

        let locator = VerseLocator::standard().expect("built-in canon");
        let verses = VerseService::new(
            Arc::new(locator),
            ScriptureClient::new(scripture_url, Some(SCRIPTURE_KEY.to_string())),
        );
        let context = ContextService::new(
            GeminiClient::new(gemini_url, "gemini-test", gemini_key.map(str::to_string)),
            250,
            Arc::new(Semaphore::new(1)),
        );
        let state = AppState::new(verses, context, "GNT");

        Self {
            router: build_router(state, "static"),
        }
    }

    async fn new() -> Self {
        Self::with(FakeScripture::default(), Some(GEMINI_KEY)).await
    }

    async fn get(&self, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("request");
        self.send(request).await
    }

    async fn post_json(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("request");
        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let (status, bytes) = self.send_raw(request).await;
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }

    async fn send_raw(&self, request: Request<Body>) -> (StatusCode, Vec<u8>) {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router response");
        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("response body")
            .to_bytes();
        (status, bytes.to_vec())
    }
}

#[tokio::test]
async fn index_page_lists_books_and_translations() {
    let app = TestApp::new().await;
    let request = Request::builder().uri("/").body(Body::empty()).expect("request");
    let (status, body) = app.send_raw(request).await;
    let html = String::from_utf8(body).expect("utf8");

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Old Testament"));
    assert!(html.contains("Deuterocanonical"));
    assert!(html.contains(r#"<option value="ruth">Ruth</option>"#));
    assert!(html.contains("NRSV-CE"));
}

#[tokio::test]
async fn static_assets_are_served() {
    let app = TestApp::new().await;
    let request = Request::builder()
        .uri("/static/app.js")
        .body(Body::empty())
        .expect("request");
    let (status, body) = app.send_raw(request).await;
    assert_eq!(status, StatusCode::OK);
    assert!(!body.is_empty());
}

#[tokio::test]
async fn lists_translations_and_books() {
    let app = TestApp::new().await;

    let (status, translations) = app.get("/api/translations").await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<&str> = translations
        .as_array()
        .expect("array")
        .iter()
        .filter_map(|t| t["id"].as_str())
        .collect();
    assert_eq!(ids, ["GNT", "NRSV-CE", "DRA"]);

    let (status, books) = app.get("/api/books").await;
    assert_eq!(status, StatusCode::OK);
    let books = books.as_array().expect("array");
    assert_eq!(books.len(), 73);
    assert_eq!(books[0]["id"], "genesis");
    assert_eq!(books[0]["testament"], "old");

    let (status, _) = app.get("/api/books/nrsvce").await;
    assert_eq!(status, StatusCode::OK);
    let (status, body) = app.get("/api/books/KJV").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Translation 'KJV' not found");
}

#[tokio::test]
async fn lists_chapters_and_verses() {
    let app = TestApp::new().await;

    let (status, chapters) = app.get("/api/chapters/ruth").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(chapters, json!([1, 2, 3, 4]));

    let (status, verses) = app.get("/api/verses/Ruth/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(verses.as_array().map(Vec::len), Some(22));

    let (status, body) = app.get("/api/chapters/nonexistentbook").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Book not found");

    let (status, body) = app.get("/api/verses/ruth/5").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Book chapter not found");
}

#[tokio::test]
async fn range_and_locate_agree() {
    let app = TestApp::new().await;

    let (status, range) = app.get("/api/range/john/3").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        range,
        json!({ "book": "john", "chapter": 3, "start": 26122, "end": 26157 })
    );

    let (status, located) = app.get("/api/locate/26137").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        located,
        json!({ "number": 26137, "address": { "book": "john", "chapter": 3, "verse": 16 } })
    );

    let (status, located) = app.get("/api/locate/35226").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(located["address"]["book"], "2maccabees");

    for uri in ["/api/locate/0", "/api/locate/35227", "/api/locate/-3"] {
        let (status, body) = app.get(uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        assert!(body["error"].as_str().is_some());
    }

    let (status, _) = app.get("/api/range/nonexistentbook/1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = app.get("/api/range/john/22").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn fetches_and_cleans_a_verse() {
    let app = TestApp::new().await;

    let (status, verse) = app.get("/api/verse/GNT/John/3/16").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        verse,
        json!({
            "book": "john",
            "chapter": 3,
            "verse": 16,
            "text": "<p>For God so loved the world</p>",
            "translation": "GNT"
        })
    );

    let (status, body) = app.get("/api/verse/KJV/john/3/16").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Translation 'KJV' not found");

    let (status, body) = app.get("/api/verse/GNT/john/3/99").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Verse john 3:99 not found");
}

#[tokio::test]
async fn upstream_failures_are_bad_gateway() {
    let app = TestApp::with(
        FakeScripture {
            only_verse: Some("JHN.3.16"),
            broken_bible: None,
        },
        Some(GEMINI_KEY),
    )
    .await;

    let (status, body) = app.get("/api/verse/GNT/ruth/1/16").await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    let message = body["error"].as_str().expect("error message");
    assert!(message.starts_with("Failed to fetch Bible verse"));
    assert!(message.contains("Verse not found"));
}

#[tokio::test]
async fn navigates_across_book_boundaries() {
    let app = TestApp::new().await;

    let (status, verse) = app.get("/api/next/GNT/malachi/4/6").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(verse["book"], "matthew");
    assert_eq!(verse["chapter"], 1);
    assert_eq!(verse["verse"], 1);
    assert_eq!(verse["text"], "<p>text of MAT.1.1 in 65eec8e0b60e656b-01</p>");

    let (status, verse) = app.get("/api/previous/DRA/exodus/1/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(verse["book"], "genesis");
    assert_eq!(verse["chapter"], 50);
    assert_eq!(verse["verse"], 26);

    let (status, _) = app.get("/api/previous/GNT/genesis/1/1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = app.get("/api/next/GNT/2maccabees/15/39").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn compare_reports_unavailable_translations() {
    let app = TestApp::with(
        FakeScripture {
            only_verse: None,
            broken_bible: Some(DRA_BIBLE_ID),
        },
        Some(GEMINI_KEY),
    )
    .await;

    let (status, comparison) = app.get("/api/compare/john/3/16").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        comparison["address"],
        json!({ "book": "john", "chapter": 3, "verse": 16 })
    );
    let translations: Vec<&str> = comparison["verses"]
        .as_array()
        .expect("verses")
        .iter()
        .filter_map(|v| v["translation"].as_str())
        .collect();
    assert_eq!(translations, ["GNT", "NRSV-CE"]);
    assert_eq!(comparison["unavailable"], json!(["DRA"]));

    let (status, _) = app.get("/api/compare/nonexistentbook/1/1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn random_verse_respects_book_filter() {
    let app = TestApp::new().await;

    let (status, verse) = app.get("/api/random-verse?book=jude").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(verse["book"], "jude");
    assert_eq!(verse["chapter"], 1);
    assert_eq!(verse["translation"], "GNT");

    let (status, verse) = app.get("/api/random-verse/DRA").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(verse["translation"], "DRA");

    let (status, _) = app.get("/api/random-verse?book=nonexistentbook").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn random_verse_falls_back_to_john_3_16() {
    let app = TestApp::with(
        FakeScripture {
            only_verse: Some("JHN.3.16"),
            broken_bible: None,
        },
        Some(GEMINI_KEY),
    )
    .await;

    let (status, verse) = app.get("/api/random-verse/GNT?book=ruth").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(verse["book"], "john");
    assert_eq!(verse["chapter"], 3);
    assert_eq!(verse["verse"], 16);
    assert_eq!(verse["text"], "<p>For God so loved the world</p>");
}

#[tokio::test]
async fn search_skips_unrecognised_hits() {
    let app = TestApp::new().await;

    let (status, hits) = app.get("/api/search/GNT/love?limit=5").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        hits,
        json!([
            {
                "book": "john",
                "chapter": 3,
                "verse": 16,
                "text": "For God so loved the world",
                "translation": "GNT"
            },
            {
                "book": "1john",
                "chapter": 4,
                "verse": 8,
                "text": "God is love.",
                "translation": "GNT"
            }
        ])
    );
}

#[tokio::test]
async fn ai_context_generates_commentary() {
    let app = TestApp::new().await;

    let (status, body) = app
        .post_json(
            "/api/ai-context",
            json!({ "book": "Ruth", "chapter": 1, "verse": 16 }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "text": "Ruth chooses Naomi's people and God." }));

    let (status, body) = app
        .post_json(
            "/api/ai-context",
            json!({ "book": "ruth", "chapter": 1, "verse": 16, "persona": "Augustine" }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["persona"], "Augustine");
    assert_eq!(body["text"], "Ruth binds herself to Naomi, a convert's vow.");
}

#[tokio::test]
async fn ai_context_validates_requests() {
    let app = TestApp::new().await;

    let (status, body) = app
        .post_json("/api/ai-context", json!({ "book": "ruth", "chapter": 1 }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Book, chapter, and verse are required");

    let (status, _) = app
        .post_json(
            "/api/ai-context",
            json!({ "book": "ruth", "chapter": 9, "verse": 1 }),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn ai_context_reports_configuration_and_upstream_failures() {
    let unconfigured = TestApp::with(FakeScripture::default(), None).await;
    let (status, body) = unconfigured
        .post_json(
            "/api/ai-context",
            json!({ "book": "ruth", "chapter": 1, "verse": 16 }),
        )
        .await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["error"], "AI context is not configured");

    let rejected = TestApp::with(FakeScripture::default(), Some("wrong-key")).await;
    let (status, body) = rejected
        .post_json(
            "/api/ai-context",
            json!({ "book": "ruth", "chapter": 1, "verse": 16 }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["error"], "Failed to generate AI context");
}

#[tokio::test]
async fn malformed_numbers_in_paths_are_json_not_found() {
    let app = TestApp::new().await;

    for uri in [
        "/api/locate/abc",
        "/api/locate/99999999999999999999",
        "/api/verses/ruth/-1",
        "/api/range/ruth/x",
        "/api/verse/GNT/john/x/16",
        "/api/next/GNT/john/3/sixteen",
        "/api/compare/john/3/-16",
    ] {
        let (status, body) = app.get(uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        assert!(body["error"].is_string(), "{uri} returned {body}");
    }

    let (_, body) = app.get("/api/locate/99999999999999999999").await;
    assert_eq!(
        body["error"],
        "verse number 99999999999999999999 is outside 1..=35226"
    );
    let (_, body) = app.get("/api/verses/ruth/-1").await;
    assert_eq!(body["error"], "Book chapter not found");
}

#[tokio::test]
async fn search_rejects_blank_queries() {
    let app = TestApp::new().await;

    let (status, body) = app.get("/api/search/GNT/%20%20").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Search query is required");

    let (status, body) = app.get("/api/search/GNT/love?limit=many").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn search_failures_name_the_search() {
    let app = TestApp::with(
        FakeScripture {
            only_verse: None,
            broken_bible: Some(DRA_BIBLE_ID),
        },
        Some(GEMINI_KEY),
    )
    .await;

    let (status, body) = app.get("/api/search/DRA/love?limit=5").await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    let message = body["error"].as_str().expect("error message");
    assert!(message.starts_with("Failed to search verses"), "{message}");
}

#[tokio::test]
async fn malformed_ai_context_body_is_json_error() {
    let app = TestApp::new().await;
    let request = Request::builder()
        .method("POST")
        .uri("/api/ai-context")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{ not json"))
        .expect("request");

    let (status, body) = app.send(request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}
