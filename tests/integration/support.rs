use std::sync::Arc;

use ratatui::{Terminal, backend::TestBackend};
use tgcloud_app::App;
use tgcloud_app::test_support::ScriptedApi;
use tgcloud_config::HostContext;
use tgcloud_models::{FileItem, FileKind};

pub use tgcloud_app::test_support::folder;

pub fn app_with(backend: &Arc<ScriptedApi>) -> App {
    App::new(backend.clone(), HostContext::default())
}

pub fn file(name: &str, kind: FileKind, folder: &str) -> FileItem {
    FileItem {
        folder: folder.to_string(),
        created_at: "2024-03-09T18:45:00Z".to_string(),
        size: "3.1 MB".to_string(),
        ..tgcloud_app::test_support::file(name, kind)
    }
}

/// Renders the app into an in-memory terminal and returns the screen text.
pub fn screen(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(120, 32)).unwrap();
    terminal.draw(|f| tgcloud_ui::draw(f, app)).unwrap();

    let buffer = terminal.backend().buffer();
    let width = buffer.area.width as usize;
    buffer
        .content
        .chunks(width)
        .map(|row| row.iter().map(ratatui::buffer::Cell::symbol).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}
