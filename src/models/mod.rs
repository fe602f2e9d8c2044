//! Database models and domain records read by the dashboard.

pub mod content;
pub mod user;
