//! Local LLM text summarization with ordered backend fallback.

pub mod backends;
pub mod cli;
pub mod config;
pub mod dispatch;
pub mod logging;
pub mod prompt;
