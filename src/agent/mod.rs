//! Agent definition files and their discovery

pub mod loader;
pub mod parser;
