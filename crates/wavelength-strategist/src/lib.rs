//! Marketing-strategy generation: prompt construction, the chat-completion
//! call, reply parsing, and the scrape-then-generate pipeline.

pub mod client;
pub mod error;
pub mod parse;
pub mod pipeline;
pub mod prompt;
pub mod types;

pub use client::StrategyClient;
pub use error::StrategyError;
pub use parse::{extract_json_payload, parse_analysis};
pub use pipeline::{run_analysis, AnalysisError, Providers, MIN_CONTENT_CHARS};
