//! Robots.txt handling
//!
//! Fetching, parsing, and per-origin caching of robots exclusion rules.
//! Unavailable or unreadable robots.txt is always treated as permissive.

mod cache;
mod parser;

pub use cache::RobotsCache;
pub use parser::RobotsRules;
