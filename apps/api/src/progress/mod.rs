// Step-by-step progress tracking on started projects.

pub mod handlers;
pub mod plan;
pub mod stats;
pub mod store;
