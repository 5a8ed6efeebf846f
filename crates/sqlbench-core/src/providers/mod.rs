pub mod judge;
pub mod llm;
