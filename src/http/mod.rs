//! HTTP client module
//!
//! Thin transport over `reqwest` used to fetch collection pages. Requests
//! are sent once; retry and backoff are left to the caller.

mod client;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder, RequestConfig};

#[cfg(test)]
mod tests;
