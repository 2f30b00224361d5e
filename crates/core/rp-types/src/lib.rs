//! Core data-plane types for Rowpipe.
//!
//! This crate provides the foundational types exchanged at the filter boundary:
//! - [`Schema`], [`Column`], [`ColumnType`] - Ordered, positionally indexed column metadata
//! - [`Value`] - The closed set of record cell kinds
//! - [`Record`], [`RecordBuilder`] - Rows and the output-row assembler

pub mod record;
pub mod schema;
pub mod value;

pub use record::*;
pub use schema::*;
pub use value::*;
