#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Gongke API
//!
//! The axum application and server runner for the submission relay.

pub mod app;
pub mod server;

pub use app::{app, AppState};
pub use server::serve;
