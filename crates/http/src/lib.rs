//! kb-chat HTTP client
//!
//! Talks to the question-answering endpoint on behalf of the chat UI. Builds
//! for native targets (used by the tests) and for `wasm32` in the browser.

pub mod client;

pub use client::{QaClient, QaClientBuilder, error::ClientError};
