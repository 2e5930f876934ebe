//! HTTP Handlers
//!
//! One module per collection, each exposing a `router()`.

pub mod reviews;
pub mod root;
pub mod students;
pub mod teachers;
pub mod users;
