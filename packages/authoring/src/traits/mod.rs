//! Core trait abstractions for the authoring library.
//!
//! These traits define the interfaces that applications implement to
//! provide storage, file upload, identity, and media metadata probing.

pub mod identity;
pub mod probe;
pub mod store;
pub mod uploader;
