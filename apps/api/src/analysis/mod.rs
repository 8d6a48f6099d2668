// Gap analysis: prompt construction, input gating, the analyzer itself,
// and the JSON API over it.
// All LLM calls go through llm_client, never straight to the provider.

pub mod analyzer;
pub mod handlers;
pub mod prompts;
pub mod validation;
