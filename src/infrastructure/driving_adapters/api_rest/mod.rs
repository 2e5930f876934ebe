//! REST API Module
//!
//! Contains HTTP handlers, DTOs, and middleware for the REST API.

pub mod dto;
pub mod extract;
pub mod handlers;
pub mod middleware;

use std::sync::Arc;

use axum::{routing::get, Router};
use sqlx::PgPool;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::application::use_cases::{
    CreateReviewUseCase, CreateTeacherUseCase, CreateUserUseCase, DeleteReviewUseCase,
    DeleteTeacherUseCase, DeleteUserUseCase, ListReviewsUseCase, ListStudentsUseCase,
    ListTeachersUseCase, ListUsersUseCase, UpdateReviewStatusUseCase, UpdateTeacherUseCase,
    UpdateUserRoleUseCase,
};
use crate::domain::gateways::{
    ReviewRepository, StudentRepository, TeacherRepository, UserRepository,
};
use crate::infrastructure::driven_adapters::repositories::{
    PostgresReviewRepository, PostgresStudentRepository, PostgresTeacherRepository,
    PostgresUserRepository,
};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub list_students_use_case: Arc<ListStudentsUseCase>,
    pub list_teachers_use_case: Arc<ListTeachersUseCase>,
    pub create_teacher_use_case: Arc<CreateTeacherUseCase>,
    pub update_teacher_use_case: Arc<UpdateTeacherUseCase>,
    pub delete_teacher_use_case: Arc<DeleteTeacherUseCase>,
    pub list_users_use_case: Arc<ListUsersUseCase>,
    pub create_user_use_case: Arc<CreateUserUseCase>,
    pub update_user_role_use_case: Arc<UpdateUserRoleUseCase>,
    pub delete_user_use_case: Arc<DeleteUserUseCase>,
    pub list_reviews_use_case: Arc<ListReviewsUseCase>,
    pub create_review_use_case: Arc<CreateReviewUseCase>,
    pub update_review_status_use_case: Arc<UpdateReviewStatusUseCase>,
    pub delete_review_use_case: Arc<DeleteReviewUseCase>,
}

impl AppState {
    /// Wire every use case to its repository
    #[must_use]
    pub fn new(
        student_repository: Arc<dyn StudentRepository>,
        teacher_repository: Arc<dyn TeacherRepository>,
        user_repository: Arc<dyn UserRepository>,
        review_repository: Arc<dyn ReviewRepository>,
    ) -> Self {
        Self {
            list_students_use_case: Arc::new(ListStudentsUseCase::new(student_repository)),
            list_teachers_use_case: Arc::new(ListTeachersUseCase::new(teacher_repository.clone())),
            create_teacher_use_case: Arc::new(CreateTeacherUseCase::new(teacher_repository.clone())),
            update_teacher_use_case: Arc::new(UpdateTeacherUseCase::new(teacher_repository.clone())),
            delete_teacher_use_case: Arc::new(DeleteTeacherUseCase::new(teacher_repository)),
            list_users_use_case: Arc::new(ListUsersUseCase::new(user_repository.clone())),
            create_user_use_case: Arc::new(CreateUserUseCase::new(user_repository.clone())),
            update_user_role_use_case: Arc::new(UpdateUserRoleUseCase::new(user_repository.clone())),
            delete_user_use_case: Arc::new(DeleteUserUseCase::new(user_repository)),
            list_reviews_use_case: Arc::new(ListReviewsUseCase::new(review_repository.clone())),
            create_review_use_case: Arc::new(CreateReviewUseCase::new(review_repository.clone())),
            update_review_status_use_case: Arc::new(UpdateReviewStatusUseCase::new(
                review_repository.clone(),
            )),
            delete_review_use_case: Arc::new(DeleteReviewUseCase::new(review_repository)),
        }
    }

    /// State backed by the PostgreSQL collections behind `pool`
    #[must_use]
    pub fn from_pool(pool: &PgPool) -> Self {
        Self::new(
            Arc::new(PostgresStudentRepository::new(pool.clone())),
            Arc::new(PostgresTeacherRepository::new(pool.clone())),
            Arc::new(PostgresUserRepository::new(pool.clone())),
            Arc::new(PostgresReviewRepository::new(pool.clone())),
        )
    }
}

/// Build the full HTTP router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root::liveness))
        .nest("/student", handlers::students::router())
        .nest("/teachers", handlers::teachers::router())
        .nest("/users", handlers::users::router())
        .nest("/reviews", handlers::reviews::router())
        .layer(axum::middleware::from_fn(middleware::request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
