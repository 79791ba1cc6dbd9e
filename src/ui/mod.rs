mod draw;
mod helpers;
mod panels;
mod theme;

pub use draw::draw;
pub use helpers::{
    format_datetime, format_size, truncate_etag, truncate_key_tail, truncate_string,
};
pub use theme::Theme;
