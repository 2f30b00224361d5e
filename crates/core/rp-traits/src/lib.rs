//! Filter trait and composition for Rowpipe.
//!
//! This crate provides:
//! - [`RecordFilter`] - The per-record transformation seam hosts drive
//! - [`FilterChain`] - Sequential composition of filters with schema chaining
//! - [`IdentityFilter`] - Passthrough filter for defaults and placeholders

pub mod filter;

pub use filter::*;
