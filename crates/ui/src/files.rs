use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};
use tgcloud_models::{FileItem, UiState, ViewState};
use tgcloud_utils::datetime::format_display_date;

use crate::theme::{ACCENT_COLOR, MUTED_COLOR, Palette};

pub const EMPTY_STATE: &str = "No files in this folder. Upload your first file!";

pub fn draw(f: &mut Frame, area: Rect, view: &ViewState, ui: &UiState, palette: Palette) {
    let label = view.current_folder.label();
    let block = Block::default()
        .title(format!(" {label} ({} items) ", view.files.len()))
        .title_style(Style::default().add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(MUTED_COLOR));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(inner);

    let upload_hint = Paragraph::new(Line::from(vec![
        Span::styled(
            format!("📤 Upload File to {label}"),
            Style::default().fg(ACCENT_COLOR).add_modifier(Modifier::BOLD),
        ),
        Span::styled("  (press u)", Style::default().fg(MUTED_COLOR)),
    ]));
    f.render_widget(upload_hint, chunks[0]);

    if view.files.is_empty() {
        let empty = Paragraph::new(EMPTY_STATE)
            .style(Style::default().fg(MUTED_COLOR))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        f.render_widget(empty, chunks[1]);
        return;
    }

    let items: Vec<ListItem> = view
        .files
        .iter()
        .skip(ui.file_scroll)
        .map(|file| file_item(file, palette))
        .collect();

    f.render_widget(List::new(items), chunks[1]);
}

fn file_item(file: &FileItem, palette: Palette) -> ListItem<'static> {
    let meta = format!(
        "{} • {} • {}",
        file.folder,
        format_display_date(&file.created_at),
        file.size
    );

    ListItem::new(vec![
        Line::from(vec![
            Span::raw(format!("{} ", file.kind.icon())),
            Span::styled(
                file.name.clone(),
                Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
            ),
            // Download has no action yet
            Span::styled("  ⬇️", Style::default().fg(MUTED_COLOR)),
        ]),
        Line::from(Span::styled(format!("   {meta}"), Style::default().fg(MUTED_COLOR))),
    ])
}
