pub mod error;
pub mod validation;
pub mod config;
pub mod model;
pub mod store;
pub mod ops;
pub mod queries;
pub mod flat_file;
pub mod cli;
