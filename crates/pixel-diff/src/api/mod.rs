//! Public API for the pixel-diff crate.
//!
//! This module provides the high-level API: the [`DiffEngine`] builder, the
//! [`compare`] shortcut and the [`DiffError`] error type.

mod engine;
mod error;

pub use engine::{compare, DiffEngine, DiffOutput};
pub use error::DiffError;
