// Generation: prompt assembly, the LLM pipelines and their HTTP handlers.
// All LLM calls go through llm_client; no direct API calls here.

pub mod assembler;
pub mod handlers;
pub mod pipeline;
pub mod prompts;
