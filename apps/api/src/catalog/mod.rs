// Project catalog: curated projects students can be recommended and start.

pub mod handlers;
pub mod seed;
pub mod store;
pub mod validation;
