//! View models and template rendering for the public site.

pub mod blocks;
pub mod views;
