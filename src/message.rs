use crate::models::record::{BucketRecord, ObjectRecord};

/// All possible actions/events in the application following The Elm Architecture (TEA)
#[derive(Debug, Clone)]
pub enum Message {
    // ===== Application Control =====
    Quit,

    // ===== Navigation =====
    MoveUp,
    MoveDown,
    Confirm,
    SwitchPanel,

    // ===== UI State Changes =====
    ShowHelp,
    DismissHelp,

    // ===== Fetch Triggers =====
    Refresh,
    Retry,

    // ===== Async Fetch Results =====
    BucketsLoaded {
        buckets: Vec<BucketRecord>,
    },
    ObjectsLoaded {
        bucket: String,
        objects: Vec<ObjectRecord>,
    },
    FetchFailed {
        error: String,
    },
}
