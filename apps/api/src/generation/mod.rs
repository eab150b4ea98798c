// Experience tailoring: prompt building, completion, bold stripping, form handlers.
// All completion calls go through llm_client; no direct HTTP calls here.

pub mod format;
pub mod generator;
pub mod handlers;
pub mod prompts;
