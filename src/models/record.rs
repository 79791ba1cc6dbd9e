use chrono::{DateTime, Utc};

/// A bucket as returned by the enumeration call, with its resolved region.
///
/// Optional fields stay faithful to what the remote call returned; display
/// defaults (`Unknown` and friends) are applied in the UI layer.
#[derive(Debug, Clone, PartialEq)]
pub struct BucketRecord {
    pub name: Option<String>,
    pub creation_date: Option<DateTime<Utc>>,
    /// Resolved via a secondary lookup; `us-east-1` when unresolvable.
    pub region: String,
    /// Present in the data shape but never populated by the listing call.
    pub object_count: u64,
}

/// A single object from a capped bucket listing.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectRecord {
    pub key: Option<String>,
    pub size: Option<i64>,
    pub last_modified: Option<DateTime<Utc>>,
    pub storage_class: Option<String>,
    /// Not rendered by the current panels but kept in the shape.
    pub etag: Option<String>,
}
