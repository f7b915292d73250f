//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod chart;
pub mod loading;
pub mod nav;

pub use chart::{WinRateChart, WinRateDatum};
pub use loading::{CardSkeleton, ChartSkeleton, Loading};
pub use nav::Nav;
