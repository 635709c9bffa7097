// Library crate exposing modules for integration tests and benches

pub mod cli;
pub mod config;
pub mod model;
pub mod report;
pub mod source;
pub mod stats;
pub mod util;
