// Recommendation client: one data-source abstraction with a live (Gemini) and a
// static fallback implementation, plus the local computations both share.
// All LLM calls go through llm_client; no direct HTTP calls here.

pub mod analysis;
pub mod catalog;
pub mod handlers;
pub mod live;
pub mod models;
pub mod prompts;
pub mod roadmap;
pub mod skills_gap;
pub mod source;
