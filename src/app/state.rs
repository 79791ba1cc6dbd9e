use crate::models::record::{BucketRecord, ObjectRecord};

/// The two list views that can hold keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Buckets,
    Objects,
}

/// Render state, derived from the session fields. Help overrides error
/// overrides the normal two-panel view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Browse,
    Help,
    Error,
}

/// Full application state, updated only through the reducer.
#[derive(Debug, Clone)]
pub struct SessionState {
    pub buckets: Vec<BucketRecord>,
    pub objects: Vec<ObjectRecord>,
    /// `None` means no bucket has been opened yet.
    pub selected_bucket: Option<String>,
    pub selected_bucket_index: usize,
    pub selected_object_index: usize,
    pub bucket_search_term: String,
    pub object_search_term: String,
    pub is_loading: bool,
    pub error: Option<String>,
    pub active_panel: Panel,
    pub show_help: bool,
    pub bucket_viewport_start: usize,
    pub object_viewport_start: usize,
    pub should_quit: bool,
}

impl SessionState {
    /// Initial state: empty lists, loading until the first bucket fetch lands.
    pub fn new() -> Self {
        Self {
            buckets: Vec::new(),
            objects: Vec::new(),
            selected_bucket: None,
            selected_bucket_index: 0,
            selected_object_index: 0,
            bucket_search_term: String::new(),
            object_search_term: String::new(),
            is_loading: true,
            error: None,
            active_panel: Panel::Buckets,
            show_help: false,
            bucket_viewport_start: 0,
            object_viewport_start: 0,
            should_quit: false,
        }
    }

    pub fn screen(&self) -> Screen {
        if self.show_help {
            Screen::Help
        } else if self.error.is_some() {
            Screen::Error
        } else {
            Screen::Browse
        }
    }

    /// Buckets whose name contains the bucket search term, case-insensitive.
    /// Nameless records are excluded whenever a non-empty term is set.
    pub fn filtered_buckets(&self) -> Vec<&BucketRecord> {
        if self.bucket_search_term.is_empty() {
            return self.buckets.iter().collect();
        }
        let term = self.bucket_search_term.to_lowercase();
        self.buckets
            .iter()
            .filter(|b| {
                b.name
                    .as_deref()
                    .is_some_and(|n| n.to_lowercase().contains(&term))
            })
            .collect()
    }

    /// Objects whose key contains the object search term, case-insensitive.
    pub fn filtered_objects(&self) -> Vec<&ObjectRecord> {
        if self.object_search_term.is_empty() {
            return self.objects.iter().collect();
        }
        let term = self.object_search_term.to_lowercase();
        self.objects
            .iter()
            .filter(|o| {
                o.key
                    .as_deref()
                    .is_some_and(|k| k.to_lowercase().contains(&term))
            })
            .collect()
    }

    pub fn switch_panel(&mut self) {
        self.active_panel = match self.active_panel {
            Panel::Buckets => Panel::Objects,
            Panel::Objects => Panel::Buckets,
        };
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bucket(name: Option<&str>) -> BucketRecord {
        BucketRecord {
            name: name.map(String::from),
            creation_date: None,
            region: "us-east-1".to_string(),
            object_count: 0,
        }
    }

    fn object(key: Option<&str>) -> ObjectRecord {
        ObjectRecord {
            key: key.map(String::from),
            size: None,
            last_modified: None,
            storage_class: None,
            etag: None,
        }
    }

    #[test]
    fn starts_loading_with_empty_lists() {
        let state = SessionState::new();
        assert!(state.is_loading);
        assert!(state.buckets.is_empty());
        assert!(state.selected_bucket.is_none());
        assert_eq!(state.active_panel, Panel::Buckets);
        assert_eq!(state.screen(), Screen::Browse);
    }

    #[test]
    fn help_overrides_error() {
        let mut state = SessionState::new();
        state.error = Some("boom".to_string());
        assert_eq!(state.screen(), Screen::Error);
        state.show_help = true;
        assert_eq!(state.screen(), Screen::Help);
    }

    #[test]
    fn empty_filter_passes_everything_through() {
        let mut state = SessionState::new();
        state.buckets = vec![bucket(Some("logs")), bucket(None)];
        assert_eq!(state.filtered_buckets().len(), 2);
    }

    #[test]
    fn filter_matches_case_insensitively() {
        let mut state = SessionState::new();
        state.buckets = vec![bucket(Some("Prod-Logs")), bucket(Some("staging"))];
        state.bucket_search_term = "LOGS".to_string();
        let filtered = state.filtered_buckets();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name.as_deref(), Some("Prod-Logs"));
    }

    #[test]
    fn filter_excludes_nameless_records() {
        let mut state = SessionState::new();
        state.objects = vec![object(Some("a/b.txt")), object(None)];
        state.object_search_term = "b".to_string();
        assert_eq!(state.filtered_objects().len(), 1);
    }

    #[test]
    fn switch_panel_toggles() {
        let mut state = SessionState::new();
        state.switch_panel();
        assert_eq!(state.active_panel, Panel::Objects);
        state.switch_panel();
        assert_eq!(state.active_panel, Panel::Buckets);
    }
}
