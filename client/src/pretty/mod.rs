//! Helpers for pretty-printing decoded lockup accounts, parsed instructions,
//! and on-chain error codes in a readable, colorized format.

pub mod account;
pub mod instruction;
pub mod program_error;
