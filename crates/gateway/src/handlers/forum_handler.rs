//! Community forum handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};

use common::{AppResult, OptionExt};
use domain::{ForumPost, NewForumPost};

use crate::extractors::{parse_id, ValidatedJson};
use crate::state::AppState;

/// Create forum routes
pub fn forum_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_posts).post(create_post))
        .route("/:id", get(get_post))
}

/// List forum posts
#[utoipa::path(
    get,
    path = "/api/forum-posts",
    tag = "Forum",
    responses((status = 200, description = "All forum posts", body = Vec<ForumPost>))
)]
pub async fn list_posts(State(state): State<AppState>) -> AppResult<Json<Vec<ForumPost>>> {
    Ok(Json(state.storage.list_forum_posts().await?))
}

/// Get forum post by ID
#[utoipa::path(
    get,
    path = "/api/forum-posts/{id}",
    tag = "Forum",
    params(("id" = i64, Path, description = "Post ID")),
    responses(
        (status = 200, description = "Forum post", body = ForumPost),
        (status = 400, description = "Invalid post ID"),
        (status = 404, description = "Forum post not found")
    )
)]
pub async fn get_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ForumPost>> {
    let id = parse_id(&id, "post")?;
    let post = state
        .storage
        .get_forum_post(id)
        .await?
        .ok_or_not_found("Forum post")?;

    Ok(Json(post))
}

/// Create a forum post
#[utoipa::path(
    post,
    path = "/api/forum-posts",
    tag = "Forum",
    request_body = NewForumPost,
    responses(
        (status = 201, description = "Post created", body = ForumPost),
        (status = 400, description = "Validation error")
    )
)]
pub async fn create_post(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<NewForumPost>,
) -> AppResult<(StatusCode, Json<ForumPost>)> {
    let post = state.storage.create_forum_post(payload).await?;

    Ok((StatusCode::CREATED, Json(post)))
}
