pub mod aggregate;
pub mod config;
pub mod dataset;
pub mod engine;
pub mod errors;
pub mod model;
pub mod prompts;
pub mod providers;
pub mod report;
pub mod score;
