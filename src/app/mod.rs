mod state;
mod update;
pub mod viewport;

pub use state::{Panel, Screen, SessionState};
pub use update::{update, Command};
pub use viewport::{viewport_start, VIEWPORT_SIZE};
