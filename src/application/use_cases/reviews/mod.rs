//! Review Use Cases

mod create_review;
mod delete_review;
mod list_reviews;
mod update_review_status;

pub use create_review::CreateReviewUseCase;
pub use delete_review::DeleteReviewUseCase;
pub use list_reviews::ListReviewsUseCase;
pub use update_review_status::UpdateReviewStatusUseCase;
