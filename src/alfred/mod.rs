//! Alfred script filter output

pub mod mapper;
pub mod output;
pub mod types;

pub use mapper::script_filter;
pub use output::{emit, to_json};
pub use types::Output;
