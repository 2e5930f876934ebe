//! Liveness Handler

/// GET / - Plain-text liveness probe; never touches the database
pub async fn liveness() -> &'static str {
    "school is running"
}
