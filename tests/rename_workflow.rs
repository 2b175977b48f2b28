// tests/rename_workflow.rs
//
// Whole-directory runs over real PNG files, with OCR text and color labels
// served from a manifest.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use product_renamer::{
    register_logging_handlers, AppError, AppState, Backend, CodeSource, EventBus, RenameOutcome,
    RenamerConfig,
};

const MANIFEST: &str = r#"{
    "IMG_0001.png": {
        "label": 6,
        "fast": [{"text": "红标", "confidence": 0.8}],
        "accurate": [
            {"text": "SIZE", "confidence": 0.95},
            {"text": "A3422300021Y00R14.5", "confidence": 0.9}
        ]
    },
    "IMG_0002.png": {
        "accurate": [{"text": "12.5", "confidence": 0.6}]
    },
    "IMG_0004.png": {
        "fast": [{"text": "蓝标", "confidence": 0.9}],
        "accurate": [{"text": "XY-2024", "confidence": 0.8}]
    }
}"#;

fn write_png(dir: &Path, name: &str) {
    image::RgbImage::from_pixel(8, 8, image::Rgb([200, 30, 30]))
        .save(dir.join(name))
        .unwrap();
}

fn photo_directory(names: &[&str], manifest: &str) -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    for name in names {
        write_png(dir.path(), name);
    }
    fs::write(dir.path().join("ocr-manifest.json"), manifest).unwrap();
    fs::write(dir.path().join("notes.txt"), "not a photo").unwrap();
    dir
}

fn state(dir: &Path, config: &RenamerConfig, dry_run: bool) -> AppState {
    let bus = Arc::new(EventBus::new());
    register_logging_handlers(&bus);
    AppState::build(
        config,
        &Backend::Manifest(dir.join("ocr-manifest.json")),
        dry_run,
        bus,
    )
    .unwrap()
}

fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    names.sort();
    names
}

#[test]
fn renames_groups_after_their_codes() {
    let dir = photo_directory(
        &["IMG_0001.png", "IMG_0002.png", "IMG_0003.png", "IMG_0004.png", "IMG_0005.png"],
        MANIFEST,
    );
    let state = state(dir.path(), &RenamerConfig::default(), false);

    let summary = state.processing_service.process_directory(dir.path()).unwrap();

    assert_eq!(summary.images, 5);
    assert_eq!(summary.groups.len(), 2);
    assert_eq!(summary.groups[0].name, "group1-red");
    assert_eq!(summary.groups[0].code.code, "A3422300021Y00R14.5");
    // Marked through the fast pass keyword, no color label
    assert_eq!(summary.groups[1].name, "group2-blue");
    assert_eq!(summary.groups[1].code.code, "XY-2024");
    assert_eq!(summary.renamed, 5);
    assert_eq!(summary.failed, 0);

    assert_eq!(
        file_names(dir.path()),
        vec![
            "A3422300021Y00R14.5-1.png",
            "A3422300021Y00R14.5-2.png",
            "A3422300021Y00R14.5-标签.png",
            "XY-2024-1.png",
            "XY-2024-标签.png",
            "notes.txt",
            "ocr-manifest.json",
        ]
    );

    assert_eq!(state.event_bus.count_of("FileRenamed"), 5);
    assert_eq!(state.event_bus.count_of("RunCompleted"), 1);
}

#[test]
fn dry_run_leaves_files_alone() {
    let dir = photo_directory(&["IMG_0001.png", "IMG_0002.png"], MANIFEST);
    let before = file_names(dir.path());
    let state = state(dir.path(), &RenamerConfig::default(), true);

    let summary = state.processing_service.process_directory(dir.path()).unwrap();

    assert_eq!(file_names(dir.path()), before);
    assert_eq!(summary.planned, 2);
    assert!(summary.groups[0]
        .renames
        .iter()
        .all(|r| r.outcome == RenameOutcome::Planned));

    let report = serde_json::to_value(&summary).unwrap();
    assert_eq!(report["dry_run"], true);
    assert_eq!(report["groups"][0]["renames"][0]["outcome"]["status"], "planned");
    assert_eq!(report["groups"][0]["renames"][0]["role"], "label");
}

#[test]
fn group_without_code_uses_group_name() {
    let dir = photo_directory(&["DSC_1.png", "DSC_2.png"], "{}");
    let config = RenamerConfig {
        label_suffix: "label".to_string(),
        ..RenamerConfig::default()
    };
    let state = state(dir.path(), &config, false);

    let summary = state.processing_service.process_directory(dir.path()).unwrap();

    assert_eq!(summary.groups.len(), 1);
    assert_eq!(summary.groups[0].code.source, CodeSource::Fallback);
    assert_eq!(summary.fallbacks, 1);
    assert!(dir.path().join("group1-none-1.png").exists());
    assert!(dir.path().join("group1-none-2.png").exists());
}

#[test]
fn repeated_code_in_later_group_is_suffixed() {
    let manifest = r#"{
        "a.png": {"label": 6, "accurate": [{"text": "AB12345678", "confidence": 0.9}]},
        "b.png": {"label": 4, "accurate": [{"text": "AB12345678", "confidence": 0.9}]}
    }"#;
    let dir = photo_directory(&["a.png", "b.png"], manifest);
    let state = state(dir.path(), &RenamerConfig::default(), false);

    let summary = state.processing_service.process_directory(dir.path()).unwrap();

    assert_eq!(summary.groups[1].code.source, CodeSource::Disambiguated);
    assert!(dir.path().join("AB12345678-标签.png").exists());
    assert!(dir.path().join("AB12345678-group2-blue-标签.png").exists());
}

#[test]
fn directory_without_images_is_informational() {
    let dir = photo_directory(&[], "{}");
    let state = state(dir.path(), &RenamerConfig::default(), false);

    let error = state
        .processing_service
        .process_directory(dir.path())
        .unwrap_err();

    assert!(matches!(error, AppError::NoImages(_)));
    assert!(error.is_informational());
    assert_eq!(file_names(dir.path()), vec!["notes.txt", "ocr-manifest.json"]);
}
