//! Database row types. One struct per table, mapped with `sqlx::FromRow`.

pub mod comparison;
pub mod progress;
pub mod project;
pub mod recommendation;
pub mod student;
