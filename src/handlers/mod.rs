pub mod key_to_message;

pub use key_to_message::key_to_message;
