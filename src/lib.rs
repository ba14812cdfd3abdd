pub mod cli;
pub mod config;
pub mod ddl;
pub mod error;
pub mod generator;
pub mod json_sample;
pub mod logging;
pub mod mapping;
pub mod prompt;
pub mod render;
