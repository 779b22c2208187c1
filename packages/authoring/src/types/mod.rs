//! Data types for the authoring workflow.

pub mod draft;
pub mod media;
pub mod post;
pub mod report;
