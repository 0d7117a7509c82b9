pub mod config;
pub mod normalizations;
