// Shared prompt fragments.
// Each service that needs LLM calls defines its own prompts.rs alongside it.

/// Appended to every system prompt; the remote call runs in JSON mode and
/// anything outside the object is a parse failure.
pub const JSON_ONLY_INSTRUCTION: &str = "You MUST respond with a single valid JSON object only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";
