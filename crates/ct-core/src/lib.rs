//! Core library for comptour: compile-time evaluation helpers, lazy range
//! pipelines, type-conditional formatting, and the labeled display sink.

pub mod consteval;
pub mod display;
pub mod error;
pub mod pipeline;
pub mod typeinfo;

// Re-export commonly used items for convenience
pub use consteval::{checked_non_negative, non_negative, square, squares_table, SQUARES_TABLE};
pub use display::{DisplaySink, LABEL_WIDTH};
pub use pipeline::{Naturals, Pipeline};
pub use typeinfo::TypeClass;

pub use error::{Error, Result};
