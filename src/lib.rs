pub mod aggregator;
pub mod cli;
pub mod error;
pub mod github;
pub mod models;
pub mod report;
pub mod types;
