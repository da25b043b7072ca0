use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};
use tgcloud_app::App;
use tgcloud_config::ThemeParams;
use tgcloud_models::{Alert, AlertKind, InputMode, UiState, ViewState};

mod files;
mod folders;
pub mod theme;

use theme::{ACCENT_COLOR, ERROR_COLOR, MUTED_COLOR, Palette};

pub const LOADING_TEXT: &str = "Loading your cloud storage...";

pub fn draw(f: &mut Frame, app: &App) {
    render(f, &app.view, &app.ui, &app.host.theme);
}

/// Draws the whole view from state alone.
pub fn render(f: &mut Frame, view: &ViewState, ui: &UiState, theme: &ThemeParams) {
    let palette = Palette::from_theme(theme);
    let area = f.area();

    let root = Block::default().style(Style::default().bg(palette.background).fg(palette.text));
    f.render_widget(root, area);

    if view.loading {
        let loading = Paragraph::new(LOADING_TEXT)
            .alignment(Alignment::Center)
            .style(Style::default().add_modifier(Modifier::ITALIC));
        f.render_widget(loading, centered_rect(80, 10, area));
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title and stats
            Constraint::Min(0),    // Folders and files
            Constraint::Length(3), // Status bar
        ])
        .split(area);

    draw_header(f, chunks[0], view);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(chunks[1]);

    folders::draw(f, body[0], view, ui, palette);
    files::draw(f, body[1], view, ui, palette);

    draw_status_bar(f, chunks[2], view, ui);

    if ui.show_help {
        draw_help_overlay(f);
    }
    if let Some(alert) = &ui.alert {
        draw_alert(f, alert);
    }
}

fn draw_header(f: &mut Frame, area: Rect, view: &ViewState) {
    let stats = &view.stats;
    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            "☁️ Telegram Cloud Storage",
            Style::default().fg(ACCENT_COLOR).add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::raw(format!("📁 {} files", stats.total_files)),
            Span::raw("   "),
            Span::raw(format!("🖼️ {} photos", stats.photos)),
            Span::raw("   "),
            Span::raw(format!("🎥 {} videos", stats.videos)),
        ]),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::BOTTOM).border_style(Style::default().fg(MUTED_COLOR)));

    f.render_widget(header, area);
}

fn draw_status_bar(f: &mut Frame, area: Rect, view: &ViewState, ui: &UiState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(75), Constraint::Percentage(25)])
        .split(area);

    let left = match ui.input_mode {
        InputMode::Editing => Line::from(vec![
            Span::styled("📤 Upload path: ", Style::default().fg(ACCENT_COLOR)),
            Span::raw(format!("{}▏", ui.input_buffer)),
            Span::styled("  Enter:Upload | Esc:Cancel", Style::default().fg(MUTED_COLOR)),
        ]),
        InputMode::Normal => Line::from(Span::styled(
            "q:Quit | ?:Help | ↑↓:Folders | Enter:Open | u:Upload | r:Refresh",
            Style::default().fg(MUTED_COLOR),
        )),
    };

    let border = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(MUTED_COLOR));

    f.render_widget(Paragraph::new(left).block(border.clone()), chunks[0]);
    f.render_widget(
        Paragraph::new(format!("Files: {}", view.files.len()))
            .alignment(Alignment::Right)
            .style(Style::default().fg(MUTED_COLOR))
            .block(border),
        chunks[1],
    );
}

fn draw_alert(f: &mut Frame, alert: &Alert) {
    let area = centered_rect(60, 30, f.area());
    f.render_widget(Clear, area);

    let (title, color) = match alert.kind {
        AlertKind::Info => (" Notice ", ACCENT_COLOR),
        AlertKind::Error => (" Error ", ERROR_COLOR),
    };

    let body = Paragraph::new(vec![
        Line::from(""),
        Line::from(alert.message.as_str()),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to continue",
            Style::default().fg(MUTED_COLOR).add_modifier(Modifier::ITALIC),
        )),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .title(title)
            .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color)),
    );

    f.render_widget(body, area);
}

fn draw_help_overlay(f: &mut Frame) {
    let area = centered_rect(60, 70, f.area());
    f.render_widget(Clear, area);

    let help_text = vec![
        Line::from(""),
        Line::from(vec![Span::styled(
            "📁 Folders",
            Style::default().fg(ACCENT_COLOR).add_modifier(Modifier::BOLD),
        )]),
        Line::from("  ↑/k ↓/j       - Move between folders"),
        Line::from("  Home/End      - First/last folder"),
        Line::from("  Enter         - Open folder"),
        Line::from("  r             - Reload files"),
        Line::from("  PgUp/PgDn     - Scroll files"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "📤 Upload",
            Style::default().fg(ACCENT_COLOR).add_modifier(Modifier::BOLD),
        )]),
        Line::from("  u             - Enter a local file path to upload"),
        Line::from("  Enter / Esc   - Submit / cancel the path"),
        Line::from(""),
        Line::from("  ?/F1          - Toggle this help"),
        Line::from("  q/Esc         - Quit"),
        Line::from("  Ctrl+C        - Force quit"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Press any key to close this help",
            Style::default().fg(MUTED_COLOR).add_modifier(Modifier::ITALIC),
        )]),
    ];

    let help = Paragraph::new(help_text).block(
        Block::default()
            .title(" Keyboard Shortcuts ")
            .title_style(Style::default().fg(ACCENT_COLOR).add_modifier(Modifier::BOLD))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(ACCENT_COLOR)),
    );

    f.render_widget(help, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
