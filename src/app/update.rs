use super::state::{Panel, SessionState};
use super::viewport::viewport_start;
use crate::message::Message;

/// Side effect requested by the reducer; executed by the event loop as a
/// spawned fetch task whose completion comes back as a `Message`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    LoadBuckets,
    LoadObjects { bucket: String },
}

/// Central update function following The Elm Architecture (TEA).
/// Pure: takes the current state and a message, returns the next state and
/// an optional command. Performs no I/O.
pub fn update(
    mut state: SessionState,
    msg: Message,
    viewport_size: usize,
) -> (SessionState, Option<Command>) {
    match msg {
        // ===== Application Control =====
        Message::Quit => {
            state.should_quit = true;
            (state, None)
        }

        // ===== UI State Changes =====
        Message::ShowHelp => {
            state.show_help = true;
            (state, None)
        }
        Message::DismissHelp => {
            state.show_help = false;
            (state, None)
        }
        Message::SwitchPanel => {
            state.switch_panel();
            (state, None)
        }

        // ===== Navigation =====
        Message::MoveUp => {
            move_selection(&mut state, viewport_size, Direction::Up);
            (state, None)
        }
        Message::MoveDown => {
            move_selection(&mut state, viewport_size, Direction::Down);
            (state, None)
        }
        Message::Confirm => {
            // Only opens a bucket; ignored on the object panel and while a
            // fetch is outstanding.
            if state.active_panel != Panel::Buckets || state.is_loading {
                return (state, None);
            }
            let bucket = state
                .filtered_buckets()
                .get(state.selected_bucket_index)
                .and_then(|b| b.name.clone())
                .filter(|name| !name.is_empty());
            match bucket {
                Some(bucket) => {
                    state.active_panel = Panel::Objects;
                    state.is_loading = true;
                    state.error = None;
                    (state, Some(Command::LoadObjects { bucket }))
                }
                None => (state, None),
            }
        }

        // ===== Fetch Triggers =====
        Message::Refresh => {
            if state.is_loading {
                return (state, None);
            }
            state.is_loading = true;
            state.error = None;
            let command = match state.selected_bucket.clone() {
                Some(bucket) => Command::LoadObjects { bucket },
                None => Command::LoadBuckets,
            };
            (state, Some(command))
        }
        Message::Retry => {
            // Always re-attempts the bucket listing, regardless of which
            // fetch failed.
            if state.is_loading {
                return (state, None);
            }
            state.is_loading = true;
            state.error = None;
            (state, Some(Command::LoadBuckets))
        }

        // ===== Async Fetch Results =====
        Message::BucketsLoaded { buckets } => {
            state.buckets = buckets;
            state.is_loading = false;
            state.error = None;
            let total = state.filtered_buckets().len();
            state.selected_bucket_index = state.selected_bucket_index.min(total.saturating_sub(1));
            state.bucket_viewport_start = viewport_start(
                state.selected_bucket_index,
                total,
                state.bucket_viewport_start,
                viewport_size,
            );
            (state, None)
        }
        Message::ObjectsLoaded { bucket, objects } => {
            state.objects = objects;
            state.selected_bucket = Some(bucket);
            state.selected_object_index = 0;
            state.object_viewport_start = 0;
            state.is_loading = false;
            state.error = None;
            (state, None)
        }
        Message::FetchFailed { error } => {
            state.error = Some(error);
            state.is_loading = false;
            (state, None)
        }
    }
}

enum Direction {
    Up,
    Down,
}

fn move_selection(state: &mut SessionState, viewport_size: usize, direction: Direction) {
    match state.active_panel {
        Panel::Buckets => {
            let total = state.filtered_buckets().len();
            state.selected_bucket_index =
                step(state.selected_bucket_index, total, &direction);
            state.bucket_viewport_start = viewport_start(
                state.selected_bucket_index,
                total,
                state.bucket_viewport_start,
                viewport_size,
            );
        }
        Panel::Objects => {
            let total = state.filtered_objects().len();
            state.selected_object_index =
                step(state.selected_object_index, total, &direction);
            state.object_viewport_start = viewport_start(
                state.selected_object_index,
                total,
                state.object_viewport_start,
                viewport_size,
            );
        }
    }
}

fn step(index: usize, total: usize, direction: &Direction) -> usize {
    match direction {
        Direction::Up => index.saturating_sub(1),
        Direction::Down => (index + 1).min(total.saturating_sub(1)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::record::{BucketRecord, ObjectRecord};

    const VIEWPORT: usize = 15;

    fn bucket(name: &str) -> BucketRecord {
        BucketRecord {
            name: Some(name.to_string()),
            creation_date: None,
            region: "us-east-1".to_string(),
            object_count: 0,
        }
    }

    fn object(key: &str) -> ObjectRecord {
        ObjectRecord {
            key: Some(key.to_string()),
            size: Some(1),
            last_modified: None,
            storage_class: None,
            etag: None,
        }
    }

    fn loaded_state(bucket_count: usize) -> SessionState {
        let mut state = SessionState::new();
        state.buckets = (0..bucket_count).map(|i| bucket(&format!("b{i}"))).collect();
        state.is_loading = false;
        state
    }

    #[test]
    fn quit_sets_the_flag() {
        let (state, cmd) = update(SessionState::new(), Message::Quit, VIEWPORT);
        assert!(state.should_quit);
        assert!(cmd.is_none());
    }

    #[test]
    fn help_toggles() {
        let (state, _) = update(loaded_state(1), Message::ShowHelp, VIEWPORT);
        assert!(state.show_help);
        let (state, _) = update(state, Message::DismissHelp, VIEWPORT);
        assert!(!state.show_help);
    }

    #[test]
    fn move_down_clamps_to_last_item() {
        let mut state = loaded_state(3);
        state.selected_bucket_index = 2;
        let (state, _) = update(state, Message::MoveDown, VIEWPORT);
        assert_eq!(state.selected_bucket_index, 2);
    }

    #[test]
    fn move_up_clamps_to_zero() {
        let (state, _) = update(loaded_state(3), Message::MoveUp, VIEWPORT);
        assert_eq!(state.selected_bucket_index, 0);
    }

    #[test]
    fn navigation_scrolls_the_viewport() {
        let mut state = loaded_state(50);
        state.selected_bucket_index = 14;
        let (state, _) = update(state, Message::MoveDown, VIEWPORT);
        assert_eq!(state.selected_bucket_index, 15);
        assert_eq!(state.bucket_viewport_start, 1);
    }

    #[test]
    fn navigation_on_empty_list_stays_at_zero() {
        let (state, _) = update(loaded_state(0), Message::MoveDown, VIEWPORT);
        assert_eq!(state.selected_bucket_index, 0);
        assert_eq!(state.bucket_viewport_start, 0);
    }

    #[test]
    fn confirm_opens_the_selected_bucket() {
        let mut state = loaded_state(3);
        state.selected_bucket_index = 1;
        let (state, cmd) = update(state, Message::Confirm, VIEWPORT);
        assert_eq!(
            cmd,
            Some(Command::LoadObjects {
                bucket: "b1".to_string()
            })
        );
        assert_eq!(state.active_panel, Panel::Objects);
        assert!(state.is_loading);
    }

    #[test]
    fn confirm_on_object_panel_is_ignored() {
        let mut state = loaded_state(3);
        state.active_panel = Panel::Objects;
        let before = state.clone();
        let (state, cmd) = update(state, Message::Confirm, VIEWPORT);
        assert!(cmd.is_none());
        assert_eq!(state.active_panel, before.active_panel);
        assert_eq!(state.selected_bucket, before.selected_bucket);
        assert!(!state.is_loading);
    }

    #[test]
    fn confirm_with_no_buckets_is_ignored() {
        let (state, cmd) = update(loaded_state(0), Message::Confirm, VIEWPORT);
        assert!(cmd.is_none());
        assert!(!state.is_loading);
    }

    #[test]
    fn confirm_is_ignored_while_loading() {
        let mut state = loaded_state(3);
        state.is_loading = true;
        let (_, cmd) = update(state, Message::Confirm, VIEWPORT);
        assert!(cmd.is_none());
    }

    #[test]
    fn refresh_without_a_bucket_reloads_buckets() {
        let (state, cmd) = update(loaded_state(3), Message::Refresh, VIEWPORT);
        assert_eq!(cmd, Some(Command::LoadBuckets));
        assert!(state.is_loading);
    }

    #[test]
    fn refresh_with_a_bucket_reloads_its_objects() {
        let mut state = loaded_state(3);
        state.selected_bucket = Some("b1".to_string());
        let (_, cmd) = update(state, Message::Refresh, VIEWPORT);
        assert_eq!(
            cmd,
            Some(Command::LoadObjects {
                bucket: "b1".to_string()
            })
        );
    }

    #[test]
    fn refresh_is_ignored_while_loading() {
        let mut state = loaded_state(3);
        state.is_loading = true;
        let (_, cmd) = update(state, Message::Refresh, VIEWPORT);
        assert!(cmd.is_none());
    }

    #[test]
    fn retry_always_reloads_buckets() {
        let mut state = loaded_state(3);
        state.selected_bucket = Some("b1".to_string());
        state.error = Some("listing failed".to_string());
        let (state, cmd) = update(state, Message::Retry, VIEWPORT);
        assert_eq!(cmd, Some(Command::LoadBuckets));
        assert!(state.error.is_none());
        assert!(state.is_loading);
    }

    #[test]
    fn buckets_loaded_replaces_the_list() {
        let state = SessionState::new();
        let (state, _) = update(
            state,
            Message::BucketsLoaded {
                buckets: vec![bucket("a"), bucket("b")],
            },
            VIEWPORT,
        );
        assert_eq!(state.buckets.len(), 2);
        assert!(!state.is_loading);
        assert!(state.error.is_none());
    }

    #[test]
    fn buckets_loaded_clamps_a_stale_selection() {
        let mut state = loaded_state(50);
        state.selected_bucket_index = 40;
        state.bucket_viewport_start = 30;
        let (state, _) = update(
            state,
            Message::BucketsLoaded {
                buckets: vec![bucket("only")],
            },
            VIEWPORT,
        );
        assert_eq!(state.selected_bucket_index, 0);
        assert_eq!(state.bucket_viewport_start, 0);
    }

    #[test]
    fn objects_loaded_resets_selection_and_sets_the_bucket() {
        let mut state = loaded_state(3);
        state.selected_object_index = 7;
        state.object_viewport_start = 4;
        state.is_loading = true;
        let (state, _) = update(
            state,
            Message::ObjectsLoaded {
                bucket: "b1".to_string(),
                objects: vec![object("k1"), object("k2")],
            },
            VIEWPORT,
        );
        assert_eq!(state.selected_bucket.as_deref(), Some("b1"));
        assert_eq!(state.objects.len(), 2);
        assert_eq!(state.selected_object_index, 0);
        assert_eq!(state.object_viewport_start, 0);
        assert!(!state.is_loading);
    }

    #[test]
    fn fetch_failure_enters_error_mode() {
        let mut state = loaded_state(3);
        state.is_loading = true;
        let (state, _) = update(
            state,
            Message::FetchFailed {
                error: "Failed to list buckets: denied".to_string(),
            },
            VIEWPORT,
        );
        assert_eq!(state.error.as_deref(), Some("Failed to list buckets: denied"));
        assert!(!state.is_loading);
        assert_eq!(state.screen(), crate::app::Screen::Error);
    }

    #[test]
    fn panel_switch_works_while_loading() {
        let mut state = loaded_state(3);
        state.is_loading = true;
        let (state, _) = update(state, Message::SwitchPanel, VIEWPORT);
        assert_eq!(state.active_panel, Panel::Objects);
    }
}
