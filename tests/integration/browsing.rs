use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tgcloud_models::{FileKind, FolderEntry, FolderSelection, Stats};
use tgcloud_ui::LOADING_TEXT;

use tgcloud_app::test_support::ScriptedApi;

use crate::support::{app_with, file, folder, screen};

fn stats() -> Stats {
    Stats {
        total_files: 42,
        photos: 30,
        videos: 7,
        documents: 5,
    }
}

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[tokio::test]
async fn test_files_section_counts_loaded_files() {
    let backend = ScriptedApi::new()
        .with_profile(stats())
        .with_folders(vec![folder("General", 2), folder("Trips", 1)])
        .with_files(vec![
            file("beach.jpg", FileKind::Photo, "Trips"),
            file("tour.mp4", FileKind::Video, "General"),
            file("receipt.pdf", FileKind::Document, "General"),
        ]);
    let mut app = app_with(&backend);

    app.bootstrap().await;
    let text = screen(&app);

    assert_eq!(app.view.files.len(), 3);
    assert!(text.contains("All Files (3 items)"));
    assert!(text.contains("beach.jpg"));
    assert!(text.contains("tour.mp4"));
    assert!(text.contains("receipt.pdf"));
    assert!(text.contains("42 files"));
}

#[tokio::test]
async fn test_folder_selection_drives_file_filter() {
    let backend = ScriptedApi::new()
        .with_profile(stats())
        .with_folders(vec![folder("Work", 1)])
        .with_files(vec![file("plan.docx", FileKind::Document, "Work")]);
    let mut app = app_with(&backend);
    app.bootstrap().await;

    app.on_key(press(KeyCode::Down)).await.unwrap();
    app.on_key(press(KeyCode::Enter)).await.unwrap();
    assert_eq!(app.view.current_folder, FolderSelection::Named("Work".into()));
    assert!(screen(&app).contains("Work (1 items)"));

    app.on_key(press(KeyCode::Home)).await.unwrap();
    app.on_key(press(KeyCode::Enter)).await.unwrap();
    assert_eq!(app.view.current_folder, FolderSelection::AllFiles);

    assert_eq!(
        backend.file_requests(),
        vec![None, Some("Work".to_string()), None]
    );
}

#[tokio::test]
async fn test_folder_failure_still_shows_stats() {
    let backend = ScriptedApi::new().with_profile(stats()).with_files(Vec::new());
    let mut app = app_with(&backend);

    app.bootstrap().await;

    assert!(backend.file_requests().is_empty());
    assert!(!app.view.loading);

    let entries = app.view.folder_entries();
    assert_eq!(entries.len(), 2);
    assert!(matches!(entries[0], FolderEntry::AllFiles));
    assert!(matches!(entries[1], FolderEntry::NewFolder));

    let text = screen(&app);
    assert!(text.contains("42 files"));
    assert!(text.contains("30 photos"));
    assert!(text.contains("7 videos"));
    assert!(text.contains("All Files"));
    assert!(text.contains("New Folder"));
}

#[tokio::test]
async fn test_loading_clears_once_and_stays_cleared() {
    let backend = ScriptedApi::new()
        .with_profile(stats())
        .with_folders(vec![folder("Trips", 0)])
        .with_files(Vec::new());
    let mut app = app_with(&backend);

    assert!(app.view.loading);
    assert!(screen(&app).contains(LOADING_TEXT));

    app.bootstrap().await;
    assert!(!app.view.loading);

    app.select_folder(FolderSelection::Named("Trips".into())).await;
    assert!(!app.view.loading);
    app.select_folder(FolderSelection::AllFiles).await;
    assert!(!app.view.loading);

    let text = screen(&app);
    assert!(!text.contains(LOADING_TEXT));
    assert!(text.contains("No files in this folder. Upload your first file!"));
}

#[tokio::test]
async fn test_folder_named_all_files_behaves_like_all_files() {
    let backend = ScriptedApi::new()
        .with_profile(stats())
        .with_folders(vec![folder("All Files", 3)])
        .with_files(Vec::new());
    let mut app = app_with(&backend);
    app.bootstrap().await;

    app.on_key(press(KeyCode::Down)).await.unwrap();
    app.on_key(press(KeyCode::Enter)).await.unwrap();

    assert_eq!(app.view.current_folder, FolderSelection::AllFiles);
    assert_eq!(backend.file_requests(), vec![None, None]);
    assert!(screen(&app).contains("Upload File to All Files"));
}
