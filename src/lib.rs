//! School Management API
//!
//! REST endpoints for the students, users, teachers and reviews of a school,
//! each backed by a document collection.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod shared;
