// Per-student dashboard statistics.

pub mod handlers;
pub mod stats;
