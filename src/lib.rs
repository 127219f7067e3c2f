pub mod app;
pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod models;
pub mod routes;
pub mod service;
pub mod smugmug;

#[cfg(test)]
mod test_utils;

pub const VERSION: &str = "1.0.0";
