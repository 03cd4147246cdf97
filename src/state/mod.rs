//! State module for tracking crawl progress
//!
//! # Components
//!
//! - `PageOutcome`: What happened to a single page during the crawl (scraped,
//!   dead link, unreachable, etc.)

mod page_outcome;

pub use page_outcome::PageOutcome;
