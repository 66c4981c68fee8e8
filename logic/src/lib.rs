pub mod adapter;
pub mod compose;
pub mod help;
pub mod platform;
pub mod report;
pub mod runner;
pub mod types;
pub mod version;
