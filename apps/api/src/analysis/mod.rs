// Repository analysis: LLM-generated plausible analysis from a repository URL.
// The repository itself is never fetched; the model only sees the URL string.

pub mod analyzer;
pub mod handlers;
pub mod prompts;
