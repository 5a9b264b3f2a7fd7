// Phase 1 of the quiz: turn a profile and five answers into an aptitude analysis.
// All LLM calls go through llm_client — no direct HTTP calls here.

pub mod analyzer;
pub mod prompts;
pub mod validation;
