//! HTTP client module
//!
//! Provides the JSON GET client used to fetch datasets.
//!
//! # Features
//!
//! - **Base URL joining**: relative endpoint paths resolve against a base
//! - **Default headers**: e.g. API keys sent with every request
//! - **Optional timeout**: bound a hung request instead of waiting forever

mod client;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder};
