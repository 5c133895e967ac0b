// Public API for integration tests and potential library usage

pub mod config;
pub mod fetch;
pub mod render;
pub mod score;
pub mod session;
pub mod store;
pub mod types;
pub mod view;
