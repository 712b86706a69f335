//! Visidiff - pixel-level visual diff
//!
//! Loads a "before" and an "after" image, compares them with the
//! `pixel-diff` engine and renders the result.
//! This library exposes modules for integration testing.

pub mod error;
pub mod logging;
pub mod models;
pub mod rendering;
pub mod services;
