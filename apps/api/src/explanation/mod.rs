// Explanation API: three persona endpoints sharing one handler.
// All LLM calls go through llm_client; this module only builds prompts.

pub mod handlers;
pub mod prompts;
