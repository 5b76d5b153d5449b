pub mod core;
pub mod errors;
pub mod source;
pub mod types;

pub use errors::*;
