pub mod app;
pub mod handlers;
pub mod message;
pub mod models;
pub mod operations;
pub mod ui;

pub use app::SessionState;
pub use operations::run_app;
