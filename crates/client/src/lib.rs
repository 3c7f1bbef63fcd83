//! Client-side view-model for box-tracker.
//!
//! [`reduce`] is the only place view state changes. [`Controller`] drives it
//! from user intents and talks to the server through [`BoxApi`] and
//! [`ImageUploader`].

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]

mod api;
mod controller;
mod error;
mod image;
mod notifier;
mod sorting;
mod upload;
mod view_state;

#[cfg(test)]
mod reducer_tests;

pub use api::{BoxApi, HttpBoxApi};
pub use controller::Controller;
pub use error::ClientError;
pub use image::ImageSelection;
pub use notifier::Notifier;
pub use sorting::{apply_view, next_box_number, sort_boxes};
pub use upload::{HttpImageUploader, ImageUploader};
pub use view_state::{
    Action, AddForm, EditDraft, EditState, SortDirection, SortKey, SortSpec, Tab, ViewState,
    reduce,
};
