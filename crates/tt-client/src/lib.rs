//! tt-client library
//!
//! Typed HTTP client for the TimeTrack REST API. Remote outcomes come back
//! as [`ApiResponse`] values; local precondition violations are raised as
//! [`ClientError`] before anything is sent.

pub(crate) mod client;

#[cfg(test)]
mod tests;

pub use client::{ApiResponse, Client, ClientError, Result as ClientResult};
