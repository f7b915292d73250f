//! HTTP API Client
//!
//! Client functions for the external analytics backend.

pub mod client;

pub use client::*;
