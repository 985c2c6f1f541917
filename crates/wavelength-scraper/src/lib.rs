//! Page-content extraction through the Firecrawl scraping API.

pub mod client;
pub mod error;
pub mod types;

pub use client::{truncate_chars, FirecrawlClient, MAX_CONTENT_CHARS};
pub use error::ScrapeError;
pub use types::{ScrapeRequest, ScrapeResponse};
