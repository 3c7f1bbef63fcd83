//! Service layer for box-tracker
//!
//! Validates input and turns "no row matched" into a typed not-found error
//! before anything reaches the HTTP boundary.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]

mod box_service;
mod error;

pub use box_service::BoxService;
pub use error::ServiceError;
