//! Base-58 column filter for Rowpipe record streams.
//!
//! This crate provides [`Base58Filter`], a record filter that converts column
//! values between hexadecimal byte representation and Base-58 text while
//! passing every other column through untouched.
//!
//! # Features
//!
//! - **Pure codec**: hex ⇄ Base-58 with exact leading-zero-byte preservation
//!   and round-trip guarantees ([`codec`])
//! - **Schema evolution**: override a column in place or append the converted
//!   value as a new text column
//! - **Prefixes**: a literal prefix prepended on encode and stripped (all
//!   occurrences) before decode
//! - **Failure isolation**: a malformed cell becomes null with a logged
//!   diagnostic; a broken schema contract aborts the record
//!
//! # Example
//!
//! ```rust,ignore
//! use rp_base58::{Base58Config, Base58Filter, ColumnRule};
//! use rp_traits::RecordFilter;
//!
//! let config = Base58Config::new(vec![
//!     ColumnRule::new("_id").with_prefix("obj_").with_new_name("public_id"),
//! ]);
//!
//! let filter = Base58Filter::new(&config, input_schema)?;
//! let output = filter.apply(record)?;
//! ```

pub mod codec;
mod config;
mod planner;
mod transformer;

pub use config::{Base58Config, ColumnRule};
pub use planner::SchemaPlan;
pub use transformer::Base58Filter;
