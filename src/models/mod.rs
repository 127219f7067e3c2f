mod album;
mod photo;

pub use album::*;
pub use photo::*;
