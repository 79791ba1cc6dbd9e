pub mod config;
pub mod record;

pub use config::{Cli, SessionConfig, DEFAULT_REGION};
pub use record::{BucketRecord, ObjectRecord};
