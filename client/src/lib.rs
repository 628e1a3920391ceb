//! Client-side utilities for the lockup program.
//!
//! Includes account fetch-and-decode helpers, pretty-printing utilities, and
//! colorized log helpers.

pub mod fetch;
pub mod logs;
pub mod pretty;

pub use logs::LogColor;
