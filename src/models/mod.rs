pub mod channel;
pub mod error;
pub mod profile;
pub mod settings;
