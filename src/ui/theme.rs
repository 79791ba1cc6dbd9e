use ratatui::style::{Color, Modifier, Style};

/// Maps semantic roles to styles. `--no-color` swaps in the plain variant,
/// where the selection falls back to reversed video so it stays visible.
pub struct Theme {
    pub bucket_title: Style,
    pub object_title: Style,
    pub border_active: Style,
    pub border_inactive: Style,
    pub header: Style,
    pub selected_bucket: Style,
    pub selected_object: Style,
    pub muted: Style,
    pub status_bucket: Style,
    pub status_objects: Style,
    pub status_panel: Style,
    pub status_loading: Style,
    pub error: Style,
}

impl Theme {
    pub fn new(no_color: bool) -> Self {
        if no_color {
            Self::plain()
        } else {
            Self::colored()
        }
    }

    fn colored() -> Self {
        Self {
            bucket_title: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            object_title: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            border_active: Style::default().fg(Color::Yellow),
            border_inactive: Style::default().fg(Color::Gray),
            header: Style::default().fg(Color::DarkGray),
            selected_bucket: Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            selected_object: Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            muted: Style::default().fg(Color::DarkGray),
            status_bucket: Style::default().fg(Color::Cyan),
            status_objects: Style::default().fg(Color::Yellow),
            status_panel: Style::default().fg(Color::Green),
            status_loading: Style::default().fg(Color::Blue),
            error: Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        }
    }

    fn plain() -> Self {
        let selected = Style::default().add_modifier(Modifier::REVERSED);
        Self {
            bucket_title: Style::default().add_modifier(Modifier::BOLD),
            object_title: Style::default().add_modifier(Modifier::BOLD),
            border_active: Style::default().add_modifier(Modifier::BOLD),
            border_inactive: Style::default(),
            header: Style::default(),
            selected_bucket: selected,
            selected_object: selected,
            muted: Style::default(),
            status_bucket: Style::default(),
            status_objects: Style::default(),
            status_panel: Style::default(),
            status_loading: Style::default(),
            error: Style::default().add_modifier(Modifier::BOLD),
        }
    }
}
