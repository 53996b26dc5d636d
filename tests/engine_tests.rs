use chrono::NaiveDate;
use gistify::adapters::intake;
use gistify::app::backend::{HeuristicBackend, MockBackend, MOCK_IMAGE_EXPLANATION};
use gistify::app::render::{render_summary, save_summary, RenderStyle};
use gistify::domain::model::InputKind;
use gistify::domain::ports::{Storage, SummaryBackend};
use gistify::utils::error::ErrorCategory;
use gistify::{GistEngine, GistifyConfig, LocalStorage, OutputFormat, UploadedFile};
use std::time::Duration;
use tempfile::TempDir;

const ARTICLE: &str = "Solar panels convert sunlight into electricity. \
Battery storage keeps the power available overnight. \
Utilities are investing heavily in both technologies.";

fn storage_in(dir: &TempDir) -> LocalStorage {
    LocalStorage::new(dir.path().to_str().unwrap())
}

#[tokio::test]
async fn test_text_file_to_saved_summary() {
    let dir = TempDir::new().unwrap();
    let storage = storage_in(&dir);
    storage
        .write_file("article.txt", ARTICLE.as_bytes())
        .await
        .unwrap();

    let upload = intake::load_file(&storage, "article.txt").await.unwrap();
    assert_eq!(upload.kind, InputKind::Text);
    assert_eq!(upload.name.as_deref(), Some("article.txt"));

    let engine = GistEngine::new(HeuristicBackend::default());
    let result = engine
        .run(Some(&upload), OutputFormat::Bullets)
        .await
        .unwrap()
        .completed()
        .unwrap();

    assert_eq!(result.bullet_items().len(), 3);
    assert_eq!(result.keywords[0], "solar");

    let rendered = render_summary(&result, RenderStyle::Markdown);
    assert!(rendered.starts_with("Bullet Points"));
    assert!(rendered.contains("**Solar**"));

    let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
    let filename = save_summary(&storage, &result, date).await.unwrap();
    assert_eq!(filename, "summary-2025-06-01.txt");

    let saved = String::from_utf8(storage.read_file(&filename).await.unwrap()).unwrap();
    assert!(saved.contains("Battery storage keeps the power available overnight"));
}

#[tokio::test]
async fn test_gist_of_pasted_text() {
    let engine = GistEngine::new(HeuristicBackend::default());
    let upload = UploadedFile::from_text(ARTICLE);

    let result = engine
        .run(Some(&upload), OutputFormat::Gist)
        .await
        .unwrap()
        .completed()
        .unwrap();

    assert_eq!(
        result.content,
        "Solar panels convert sunlight into electricity. Battery storage keeps the power available overnight."
    );
    assert!(result.image_url.is_none());
}

#[tokio::test]
async fn test_blank_paste_is_rejected() {
    let engine = GistEngine::new(HeuristicBackend::default());
    let upload = UploadedFile::from_text("  \n ");

    let err = engine
        .run(Some(&upload), OutputFormat::Gist)
        .await
        .unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Input);
    assert_eq!(err.user_friendly_message(), "Please enter some text first!");
}

#[tokio::test]
async fn test_image_upload_gets_visual_summary_and_explanation() {
    let upload = intake::from_bytes("chart.png", vec![0x89, b'P', b'N', b'G']);
    assert_eq!(upload.kind, InputKind::Image);
    assert!(upload.text.is_none());

    let engine = GistEngine::new(MockBackend::new(Duration::from_millis(5)));
    let (summary, explanation) = tokio::join!(
        engine.run(Some(&upload), OutputFormat::Image),
        engine.explain(&upload)
    );

    let summary = summary.unwrap().completed().unwrap();
    assert_eq!(summary.format, OutputFormat::Image);
    assert!(summary.image_url.is_some());

    let explanation = explanation.unwrap().unwrap().completed().unwrap();
    assert_eq!(explanation, MOCK_IMAGE_EXPLANATION);
}

#[tokio::test]
async fn test_latest_request_wins() {
    let engine = GistEngine::new(MockBackend::new(Duration::from_millis(100)));
    let upload = UploadedFile::from_text(ARTICLE);

    let slow = engine.run(Some(&upload), OutputFormat::Gist);
    let fast = async {
        tokio::time::sleep(Duration::from_millis(20)).await;
        engine.run(Some(&upload), OutputFormat::Bullets).await
    };
    let (first, second) = tokio::join!(slow, fast);

    assert!(first.unwrap().is_superseded());
    let second = second.unwrap().completed().unwrap();
    assert_eq!(second.format, OutputFormat::Bullets);
}

#[tokio::test]
async fn test_configured_backend_drives_engine() {
    let config = GistifyConfig::from_toml_str(
        r#"
[summarizer]
max_keywords = 2

[backend]
kind = "heuristic"
"#,
    )
    .unwrap();

    let engine = GistEngine::new(config.build_backend());
    assert_eq!(engine.backend().name(), "heuristic");

    let upload = UploadedFile::from_text(ARTICLE);
    let result = engine
        .run(Some(&upload), OutputFormat::Gist)
        .await
        .unwrap()
        .completed()
        .unwrap();
    assert_eq!(result.keywords, vec!["solar", "panels"]);
}
