// Recommendation engine: ranks catalog projects against a student's skill profile.
// Primary tier asks the LLM; the deterministic fallback scorer covers any failure of it.
// All LLM calls go through llm_client.

pub mod fallback;
pub mod handlers;
pub mod llm_strategy;
pub mod prompts;
pub mod selector;
pub mod store;
pub mod strategy;
