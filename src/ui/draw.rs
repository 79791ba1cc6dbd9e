use ratatui::{
    layout::{Constraint, Direction, Layout},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::panels::{draw_bucket_panel, draw_object_panel, draw_status_bar};
use super::theme::Theme;
use crate::app::{Screen, SessionState};

pub fn draw(f: &mut Frame, state: &SessionState, theme: &Theme) {
    match state.screen() {
        Screen::Browse => draw_browse(f, state, theme),
        Screen::Help => draw_help(f, theme),
        Screen::Error => draw_error(f, state, theme),
    }
}

fn draw_browse(f: &mut Frame, state: &SessionState, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(f.area());

    let panel_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[0]);

    draw_bucket_panel(f, panel_chunks[0], state, theme);
    draw_object_panel(f, panel_chunks[1], state, theme);
    draw_status_bar(f, chunks[1], state, theme);
}

fn draw_help(f: &mut Frame, theme: &Theme) {
    let help_text = [
        "Navigation:",
        "  ↑/↓    - Move selection up/down",
        "  Tab    - Switch between buckets and objects panel",
        "  Enter  - Open selected bucket (when in buckets panel)",
        "",
        "Search:",
        "  /      - Activate search mode (planned feature)",
        "",
        "General:",
        "  ?      - Show this help screen",
        "  r      - Refresh current view",
        "  q      - Quit application",
        "  Ctrl+C - Force quit",
        "",
        "Information:",
        "  - Buckets panel shows all accessible S3 buckets",
        "  - Objects panel shows contents of the selected bucket",
        "  - Status bar shows current context and navigation hints",
        "  - Application is read-only, no modifications possible",
        "",
        "Press Esc or q to close this help screen",
    ];

    let help = Paragraph::new(help_text.join("\n"))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" s3tui - Help ")
                .title_style(theme.bucket_title),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(help, f.area());
}

fn draw_error(f: &mut Frame, state: &SessionState, theme: &Theme) {
    let message = state.error.as_deref().unwrap_or_default();
    let text = format!("{message}\n\nPress r to retry | q to quit");

    let error = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Error ")
                .title_style(theme.error)
                .border_style(theme.error),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(error, f.area());
}
