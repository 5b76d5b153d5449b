mod top_n;

pub use top_n::{RankedResult, top_n};
