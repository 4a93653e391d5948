//! HTTP-level tests for the scripture server.
//!
//! Each test builds the router over an in-memory library and drives it with
//! `tower::ServiceExt::oneshot`; no socket is bound.

use std::path::PathBuf;
use std::sync::Arc;

use axum::body::Body;
use http_body_util::BodyExt;
use hyper::{Request, StatusCode};
use scripture_core::{QueryService, ScriptureService};
use scripture_server::router::build_router;
use scripture_store::{Library, ModuleFile, PlainTextFilter};
use tower::ServiceExt;

// ── Fixtures ───────────────────────────────────────────────────

const KJV: &str = r#"
name: KJV
description: King James Version
books:
  - testament: old
    name: Genesis
    abbreviation: Gen
    chapters:
      - - "In the beginning God created the heaven and the earth."
        - "And the earth was without form, and void; and darkness <transChange type=\"added\">was</transChange> upon the face of the deep."
        - "And God said, Let there be light: and there was light."
      - - "Thus the heavens and the earth were finished, and all the host of them."
  - testament: old
    name: Exodus
    abbreviation: Exod
    chapters:
      - - "Now these <transChange type=\"added\">are</transChange> the names of the children of Israel."
  - testament: new
    name: II Timothy
    abbreviation: 2Tim
    chapters:
      - - "Paul, an apostle of Jesus Christ by the will of God <chapter eID=\"gen30993\" osisID=\"2Tim.1\"/>"
"#;

const WEB: &str = r#"
name: WEB
books:
  - testament: old
    name: Genesis
    abbreviation: Gen
    chapters:
      - - "In the beginning, God created the heavens and the earth."
"#;

fn app_with(files: Vec<ModuleFile>) -> axum::Router {
    let library = Library::from_modules(PathBuf::from("/srv/library"), files);
    let service: Arc<dyn ScriptureService> = Arc::new(
        QueryService::new(
            library.registry(),
            library.canon(),
            Arc::new(PlainTextFilter::new()),
        )
        .with_library_path(library.path().display().to_string()),
    );
    build_router(service)
}

fn app() -> axum::Router {
    app_with(vec![
        ModuleFile::from_yaml(WEB).unwrap(),
        ModuleFile::from_yaml(KJV).unwrap(),
    ])
}

fn empty_app() -> axum::Router {
    app_with(vec![])
}

// ── Helpers ────────────────────────────────────────────────────

async fn get(app: axum::Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let resp = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or_else(
        |_| serde_json::json!({ "raw": String::from_utf8_lossy(&bytes).to_string() }),
    );
    (status, json)
}

// ── Tests ──────────────────────────────────────────────────────

#[tokio::test]
async fn health_lists_modules() {
    let (status, body) = get(app(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["modules_found"], serde_json::json!(["KJV", "WEB"]));
    assert_eq!(body["library_path"], "/srv/library");
}

#[tokio::test]
async fn health_ok_without_modules() {
    let (status, body) = get(empty_app(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["modules_found"], serde_json::json!([]));
}

#[tokio::test]
async fn versions_sorted_by_name() {
    let (status, body) = get(app(), "/versions").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        serde_json::json!({ "versions": [{ "name": "KJV" }, { "name": "WEB" }] })
    );
}

#[tokio::test]
async fn books_use_canon_of_first_module() {
    let (status, body) = get(app(), "/books").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["books"],
        serde_json::json!([
            { "name": "Genesis", "number": 1, "abbreviation": "Gen", "testament": "OT" },
            { "name": "Exodus", "number": 2, "abbreviation": "Exod", "testament": "OT" },
            { "name": "II Timothy", "number": 3, "abbreviation": "2Tim", "testament": "NT" },
        ])
    );
}

#[tokio::test]
async fn book_by_name_and_abbreviation() {
    let (_, by_abbrev) = get(app(), "/books/Exod").await;
    let (_, by_name) = get(app(), "/books/Exodus").await;
    assert_eq!(by_abbrev, by_name);
    assert_eq!(by_abbrev["book"]["number"], 2);
}

#[tokio::test]
async fn chapters_listing() {
    let (status, body) = get(app(), "/books/Gen/chapters").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        serde_json::json!({ "chapters": [{ "number": 1 }, { "number": 2 }] })
    );
}

#[tokio::test]
async fn chapters_unknown_book() {
    let (status, body) = get(app(), "/books/NotABook/chapters").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Book not found");
}

#[tokio::test]
async fn verses_are_normalized() {
    let (status, body) = get(app(), "/books/Gen/chapters/1/verses").await;
    assert_eq!(status, StatusCode::OK);
    let verses = body["verses"].as_array().unwrap();
    assert_eq!(verses.len(), 3);
    for (i, verse) in verses.iter().enumerate() {
        assert_eq!(verse["number"], i + 1);
        let text = verse["text"].as_str().unwrap();
        assert!(!text.is_empty());
        assert!(!text.contains('<') && !text.contains('>'));
    }
    assert_eq!(
        verses[1]["text"],
        "And the earth was without form, and void; and darkness [was] upon the face of the deep."
    );
}

#[tokio::test]
async fn known_chapter_marker_is_removed() {
    let (_, body) = get(app(), "/books/2Tim/chapters/1/verses/1").await;
    assert_eq!(
        body["verse"]["text"],
        "Paul, an apostle of Jesus Christ by the will of God"
    );
}

#[tokio::test]
async fn verses_distinguish_segments() {
    let (status, body) = get(app(), "/books/Nope/chapters/1/verses").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Book not found");

    for chapter in ["0", "3", "-1", "one"] {
        let (status, body) = get(app(), &format!("/books/Gen/chapters/{chapter}/verses")).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "chapter {chapter}");
        assert_eq!(body["error"], "Chapter not found");
    }

    let (status, body) = get(app(), "/books/Gen/chapters/1/verses/4").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Verse not found");
}

#[tokio::test]
async fn single_verse() {
    let (status, body) = get(app(), "/books/Genesis/chapters/2/verses/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["verse"]["number"], 1);
    assert_eq!(
        body["verse"]["text"],
        "Thus the heavens and the earth were finished, and all the host of them."
    );
}

#[tokio::test]
async fn search_requires_query() {
    for uri in ["/search", "/search?query="] {
        let (status, body) = get(app(), uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Query parameter is required");
    }
}

#[tokio::test]
async fn search_hits_in_canonical_order() {
    let (status, body) = get(app(), "/search?query=light%7Cnames").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["results"],
        serde_json::json!([
            { "reference": "Genesis 1:3", "text": "And God said, Let there be light: and there was light." },
            { "reference": "Exodus 1:1", "text": "Now these are the names of the children of Israel." },
        ])
    );
}

#[tokio::test]
async fn search_without_hits_is_empty_success() {
    let (status, body) = get(app(), "/search?query=Melchizedek").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!({ "results": [] }));
}

#[tokio::test]
async fn search_malformed_pattern_is_bad_request() {
    let (status, _) = get(app(), "/search?query=%28unclosed").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn search_oversized_pattern_is_bad_request() {
    // (\w{1000}){1000}
    let (status, body) = get(app(), "/search?query=%28%5Cw%7B1000%7D%29%7B1000%7D").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let message = body["error"].as_str().unwrap();
    assert!(message.starts_with("Invalid search pattern"), "{message}");
}

#[tokio::test]
async fn empty_library_is_not_found_everywhere() {
    for uri in [
        "/versions",
        "/books",
        "/books/Gen",
        "/books/Gen/chapters",
        "/books/Gen/chapters/1/verses",
        "/books/Gen/chapters/1/verses/1",
        "/search?query=light",
        "/search",
    ] {
        let (status, body) = get(empty_app(), uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        assert_eq!(body["error"], "No Bible modules found", "{uri}");
    }
}

#[tokio::test]
async fn library_loaded_from_disk() {
    let tmp = tempfile::tempdir().unwrap();
    let mods = tmp.path().join("mods.d");
    std::fs::create_dir(&mods).unwrap();
    std::fs::write(mods.join("kjv.yaml"), KJV).unwrap();

    let library = Library::load(tmp.path()).unwrap();
    let service: Arc<dyn ScriptureService> = Arc::new(QueryService::new(
        library.registry(),
        library.canon(),
        Arc::new(PlainTextFilter::new()),
    ));
    let (status, body) = get(build_router(service), "/books/Gen/chapters/1/verses/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["verse"]["text"],
        "In the beginning God created the heaven and the earth."
    );
}
