use chrono::{DateTime, Utc};

const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Human-readable size. Absent or zero is "0 B"; whole bytes below 1 KB,
/// one decimal above.
pub fn format_size(bytes: Option<i64>) -> String {
    let bytes = match bytes {
        Some(b) if b > 0 => b,
        _ => return "0 B".to_string(),
    };

    let mut size = bytes as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }

    if unit == 0 {
        format!("{bytes} B")
    } else {
        format!("{size:.1} {}", UNITS[unit])
    }
}

pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.format("%Y-%m-%d %H:%M").to_string()
}

/// Strips the surrounding quotes an S3 ETag carries and shortens long tags.
pub fn truncate_etag(etag: Option<&str>) -> String {
    let Some(etag) = etag else {
        return String::new();
    };
    let cleaned = etag.replace('"', "");
    if cleaned.chars().count() > 12 {
        let head: String = cleaned.chars().take(12).collect();
        format!("{head}...")
    } else {
        cleaned
    }
}

/// Keeps the trailing `max` characters; object keys are most recognizable
/// by their tail.
pub fn truncate_key_tail(key: &str, max: usize) -> String {
    let count = key.chars().count();
    if count > max {
        key.chars().skip(count - max).collect()
    } else {
        key.to_string()
    }
}

/// Head-first truncation with an ellipsis.
pub fn truncate_string(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let head: String = s.chars().take(max.saturating_sub(3)).collect();
    format!("{head}...")
}
