// Student profiles: branch and skill list. Authentication lives elsewhere;
// routes identify the student explicitly by id or username.

pub mod handlers;
pub mod store;
pub mod validation;
