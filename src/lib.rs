pub mod analysis;
pub mod cancel;
pub mod config;
pub mod discovery;
pub mod engine;
pub mod error;
pub mod events;
pub mod lang;
pub mod notify;
pub mod report;
pub mod session;
pub mod store;
pub mod types;
