mod filter_plan;
mod filter_spec;

pub use filter_plan::{CompiledFilter, apply};
pub use filter_spec::{FilterSpec, InstantRange};

#[cfg(test)]
mod filter_spec_test;
