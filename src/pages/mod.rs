//! Pages
//!
//! Top-level page components for each route.

pub mod dashboard;
pub mod hero_analytics;
pub mod team_builder;

pub use dashboard::Dashboard;
pub use hero_analytics::HeroAnalytics;
pub use team_builder::TeamBuilder;
