#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Notion client for the Gongke relay.
//!
//! Provides:
//! - [`PageWriter`] — trait for the single create-page call (implement a
//!   double for tests)
//! - [`NotionClient`] — reqwest-based implementation against the Notion API
//! - [`NotionConfig`] — environment-provided token and database id
//! - [`Error`] — client error types with best-effort message extraction

pub mod client;
pub mod config;
pub mod error;

pub use client::{CreatePage, CreatedPage, NotionClient, PageWriter};
pub use config::NotionConfig;
pub use error::{Error, Result};
