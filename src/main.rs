//! Rivals Analytics Dashboard
//!
//! Game analytics dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Hero win rates and performance metrics with client-side sorting
//! - Win-rate bar chart for the most-played heroes
//! - Team builder with match-outcome predictions
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. All statistics and predictions come from an external
//! analytics backend over HTTP; this crate is presentation only.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
