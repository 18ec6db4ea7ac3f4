pub mod export;
pub mod extraction;
pub mod llm;
pub mod observability;
