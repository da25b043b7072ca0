use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState},
};
use tgcloud_models::{ALL_FILES, FolderEntry, UiState, ViewState};

use crate::theme::{ACCENT_COLOR, MUTED_COLOR, Palette};

pub fn draw(f: &mut Frame, area: Rect, view: &ViewState, ui: &UiState, palette: Palette) {
    let items: Vec<ListItem> = view
        .folder_entries()
        .iter()
        .map(|entry| {
            let active = view.is_current(entry);
            let name_style = if active {
                Style::default().fg(ACCENT_COLOR).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(palette.text)
            };

            let line = match entry {
                FolderEntry::AllFiles => Line::from(Span::styled(format!("📄 {ALL_FILES}"), name_style)),
                FolderEntry::Folder(folder) => Line::from(vec![
                    Span::styled(format!("📁 {}", folder.name), name_style),
                    Span::styled(format!("  {}", folder.file_count), Style::default().fg(MUTED_COLOR)),
                ]),
                FolderEntry::NewFolder => Line::from(Span::styled("➕ New Folder", Style::default().fg(MUTED_COLOR))),
            };
            ListItem::new(line)
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(" Your Folders ")
                .title_style(Style::default().add_modifier(Modifier::BOLD))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(MUTED_COLOR)),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("▶ ");

    let mut state = ListState::default().with_selected(Some(ui.folder_cursor));
    f.render_stateful_widget(list, area, &mut state);
}
