pub mod time;
pub mod time_bucketing;

pub use time::TimeParser;
pub use time_bucketing::{HOURS_PER_DAY, TimeBucket, day_bucket, hour_bucket, hour_label};

#[cfg(test)]
mod time_bucketing_test;
#[cfg(test)]
mod time_test;
