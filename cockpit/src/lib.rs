pub mod config;
pub mod error;
pub mod loader;
pub mod report;
pub mod trigger;
pub mod watch;
