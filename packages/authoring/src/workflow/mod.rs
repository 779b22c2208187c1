//! The submit workflow, broken into testable steps.
//!
//! [`crate::session::AuthoringSession`] drives these in order; they are
//! exposed so applications with their own state handling can too.

pub mod submit;

pub use submit::{delete_removed_media, removed_media_ids, upload_new_media, validate_draft};
