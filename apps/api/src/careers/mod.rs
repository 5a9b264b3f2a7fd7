// Phase 2 of the quiz: turn a confirmed aptitude analysis into ranked career matches.
// All LLM calls go through llm_client — no direct HTTP calls here.

pub mod matcher;
pub mod prompts;
pub mod validation;
