use color_eyre::Result;
use tempfile::TempDir;
use tgcloud_core::{PickedFile, build_upload_request};
use tgcloud_models::{AlertKind, FileKind, FolderSelection, Stats};

use tgcloud_app::test_support::ScriptedApi;

use crate::support::{app_with, file, folder, screen};

#[test]
fn test_picked_files_are_classified_by_media_type() {
    let cases = [
        ("cat.png", "image/png", FileKind::Photo),
        ("clip.mp4", "video/mp4", FileKind::Video),
        ("report.pdf", "application/pdf", FileKind::Document),
    ];

    for (name, media_type, expected) in cases {
        let request = build_upload_request(&PickedFile::new(name, media_type, 1024), &FolderSelection::AllFiles);
        assert_eq!(request.file_type, expected, "{name}");
    }
}

#[tokio::test]
async fn test_local_files_are_classified_by_extension() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let mut kinds = Vec::new();

    for name in ["cat.png", "clip.mp4", "report.pdf"] {
        let path = temp_dir.path().join(name);
        tokio::fs::write(&path, b"payload").await?;
        let picked = PickedFile::from_path(&path).await?;
        kinds.push(build_upload_request(&picked, &FolderSelection::AllFiles).file_type);
    }

    assert_eq!(kinds, vec![FileKind::Photo, FileKind::Video, FileKind::Document]);
    Ok(())
}

#[tokio::test]
async fn test_successful_upload_refetches_once() {
    let backend = ScriptedApi::new()
        .with_profile(Stats::default())
        .with_folders(vec![folder("General", 1)])
        .with_files(vec![file("cat.png", FileKind::Photo, "General")])
        .with_upload_folder("General");
    let mut app = app_with(&backend);
    app.bootstrap().await;
    assert_eq!(backend.file_requests().len(), 1);

    app.upload_file(&PickedFile::new("cat.png", "image/png", 2048)).await;

    let uploads = backend.upload_requests();
    assert_eq!(uploads.len(), 1);
    assert_eq!(uploads[0].folder, "General");
    assert_eq!(uploads[0].file_type, FileKind::Photo);

    assert_eq!(backend.file_requests(), vec![None, None]);

    let alert = app.ui.alert.clone().unwrap();
    assert_eq!(alert.kind, AlertKind::Info);
    assert_eq!(alert.message, "Ready to upload cat.png to General");
    assert!(screen(&app).contains("Ready to upload cat.png to General"));
}

#[tokio::test]
async fn test_failed_upload_leaves_files_alone() {
    let backend = ScriptedApi::new()
        .with_profile(Stats::default())
        .with_folders(Vec::new())
        .with_files(Vec::new());
    let mut app = app_with(&backend);
    app.bootstrap().await;

    app.upload_file(&PickedFile::new("report.pdf", "application/pdf", 10)).await;

    assert_eq!(backend.upload_requests().len(), 1);
    assert_eq!(backend.file_requests(), vec![None]);
    assert_eq!(app.ui.alert.as_ref().map(|a| a.kind), Some(AlertKind::Error));
    assert!(screen(&app).contains("Upload failed. Please try again."));
}
