pub mod run;
pub mod s3;

pub use run::run_app;
pub use s3::{RemoteError, S3Service};
