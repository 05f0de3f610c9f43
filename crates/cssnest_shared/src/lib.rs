//! Shared functionality
//!
//! This crate supplies the pieces that every cssnest crate needs: a handle on the original
//! source text and the error types that are returned from the parser.
//!

pub mod errors;
pub mod source;
