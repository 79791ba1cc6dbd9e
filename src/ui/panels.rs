use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use super::helpers::{format_datetime, format_size, truncate_key_tail, truncate_string};
use super::theme::Theme;
use crate::app::{Panel, SessionState, VIEWPORT_SIZE};

pub fn draw_bucket_panel(f: &mut Frame, area: Rect, state: &SessionState, theme: &Theme) {
    let is_active = state.active_panel == Panel::Buckets;
    let filtered = state.filtered_buckets();
    let total = filtered.len();
    let start = state.bucket_viewport_start;
    let end = (start + VIEWPORT_SIZE).min(total);
    let clipped = total > VIEWPORT_SIZE;

    let title = if total == 0 {
        " Buckets ".to_string()
    } else {
        format!(" Buckets ({}-{} of {}) ", start + 1, end, total)
    };

    let mut items: Vec<ListItem> = Vec::new();
    if state.is_loading && state.buckets.is_empty() {
        items.push(ListItem::new("Loading buckets..."));
    } else if total == 0 {
        items.push(ListItem::new("No buckets found").style(theme.muted));
    } else {
        items.push(
            ListItem::new(format!("{:<25} {:<15} {}", "Name", "Region", "Created"))
                .style(theme.header),
        );
        if clipped && start > 0 {
            items.push(ListItem::new("↑ More items above").style(theme.muted));
        }
        for (offset, bucket) in filtered[start..end].iter().enumerate() {
            let index = start + offset;
            let name = bucket.name.as_deref().unwrap_or("Unknown");
            let created = bucket
                .creation_date
                .as_ref()
                .map(format_datetime)
                .unwrap_or_else(|| "Unknown".to_string());
            let row = format!(
                "{:<25} {:<15} {}",
                truncate_string(name, 25),
                bucket.region,
                created
            );
            let style = if is_active && index == state.selected_bucket_index {
                theme.selected_bucket
            } else {
                Style::default()
            };
            items.push(ListItem::new(row).style(style));
        }
        if clipped && end < total {
            items.push(ListItem::new("↓ More items below").style(theme.muted));
        }
        let plural = if total == 1 { "" } else { "s" };
        items.push(ListItem::new(format!("Total: {total} bucket{plural}")).style(theme.muted));
    }

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .title_style(theme.bucket_title)
            .border_style(panel_border(theme, is_active)),
    );
    f.render_widget(list, area);
}

pub fn draw_object_panel(f: &mut Frame, area: Rect, state: &SessionState, theme: &Theme) {
    let is_active = state.active_panel == Panel::Objects;
    let filtered = state.filtered_objects();
    let total = filtered.len();
    let start = state.object_viewport_start;
    let end = (start + VIEWPORT_SIZE).min(total);
    let clipped = total > VIEWPORT_SIZE;

    let title = match (&state.selected_bucket, total) {
        (None, _) => " Objects ".to_string(),
        (Some(bucket), 0) => format!(" Objects: {bucket} "),
        (Some(bucket), _) => {
            format!(" Objects: {bucket} ({}-{} of {}) ", start + 1, end, total)
        }
    };

    let mut items: Vec<ListItem> = Vec::new();
    match &state.selected_bucket {
        None => {
            items.push(ListItem::new("Select a bucket to view objects").style(theme.muted));
        }
        Some(bucket) if state.is_loading => {
            items.push(ListItem::new(format!("Loading objects from {bucket}...")));
        }
        Some(_) if total == 0 => {
            let text = if state.objects.is_empty() {
                "No objects in bucket"
            } else {
                "No objects match search"
            };
            items.push(ListItem::new(text).style(theme.muted));
        }
        Some(_) => {
            items.push(
                ListItem::new(format!(
                    "{:<30} {:<12} {:<20} {}",
                    "Key", "Size", "Modified", "Class"
                ))
                .style(theme.header),
            );
            if clipped && start > 0 {
                items.push(ListItem::new("↑ More items above").style(theme.muted));
            }
            for (offset, object) in filtered[start..end].iter().enumerate() {
                let index = start + offset;
                let key = object.key.as_deref().unwrap_or("Unknown");
                let modified = object
                    .last_modified
                    .as_ref()
                    .map(format_datetime)
                    .unwrap_or_else(|| "Unknown".to_string());
                let class = object.storage_class.as_deref().unwrap_or("STANDARD");
                let row = format!(
                    "{:<30} {:<12} {:<20} {}",
                    truncate_key_tail(key, 28),
                    format_size(object.size),
                    modified,
                    truncate_string(class, 10)
                );
                let style = if is_active && index == state.selected_object_index {
                    theme.selected_object
                } else {
                    Style::default()
                };
                items.push(ListItem::new(row).style(style));
            }
            if clipped && end < total {
                items.push(ListItem::new("↓ More items below").style(theme.muted));
            }
            let plural = if total == 1 { "" } else { "s" };
            items.push(ListItem::new(format!("Total: {total} object{plural}")).style(theme.muted));
        }
    }

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .title_style(theme.object_title)
            .border_style(panel_border(theme, is_active)),
    );
    f.render_widget(list, area);
}

pub fn draw_status_bar(f: &mut Frame, area: Rect, state: &SessionState, theme: &Theme) {
    let mut spans = vec![Span::styled(
        format!(
            "Bucket: {}",
            state.selected_bucket.as_deref().unwrap_or("None selected")
        ),
        theme.status_bucket,
    )];
    if state.selected_bucket.is_some() {
        spans.push(Span::styled(
            format!("  Objects: {}", state.objects.len()),
            theme.status_objects,
        ));
    }
    let panel = match state.active_panel {
        Panel::Buckets => "Buckets",
        Panel::Objects => "Objects",
    };
    spans.push(Span::styled(format!("  Panel: {panel}"), theme.status_panel));
    if state.is_loading {
        spans.push(Span::styled("  Loading...", theme.status_loading));
    }
    spans.push(Span::styled(
        "  Press ? for help | q to quit",
        theme.muted,
    ));

    let bar = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL));
    f.render_widget(bar, area);
}

fn panel_border(theme: &Theme, is_active: bool) -> Style {
    if is_active {
        theme.border_active
    } else {
        theme.border_inactive
    }
}
