//! Domain Models
//!
//! Records, identifiers and the per-collection models.

pub mod record;
pub mod review;
pub mod teacher;
pub mod user;

pub use record::{Document, Record, RecordId, UpdateOutcome};
pub use review::{NewReview, ReviewDecision, ReviewStatus};
pub use teacher::TeacherProfile;
pub use user::{NewUser, UserRole};
