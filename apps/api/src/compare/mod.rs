// Side-by-side comparison of two students' skills and progress.

pub mod comparison;
pub mod handlers;
