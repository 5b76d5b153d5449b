mod dataset;
mod normalize;
mod schema;

pub use dataset::{Dataset, Row};
pub use normalize::normalize;
pub use schema::Schema;
