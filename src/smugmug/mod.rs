mod client;
pub mod normalizer;
pub mod oauth;
pub mod payload;
pub mod resolver;

pub use client::{check_status, SmugMugClient, UpstreamApi};
