#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Gongke Core Library
//!
//! Submission model, numeric normalization rules, and the Notion page
//! payload shape shared by the relay's HTTP surface and client.

pub mod error;
pub mod page;
mod proptests;
pub mod submission;

// Re-exports for convenience
pub use error::{Error, Result};
pub use page::{Block, PageProperties, RichText};
pub use submission::{clamp04, Submission};
