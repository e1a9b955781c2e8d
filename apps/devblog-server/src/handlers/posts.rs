//! JSON API over the post store.

use actix_web::{HttpResponse, web};

use devblog_core::domain::{Post, PostPatch};
use devblog_shared::ApiResponse;
use devblog_shared::dto::{CreatePostRequest, PostResponse, SearchQuery, UpdatePostRequest};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

fn post_not_found() -> AppError {
    AppError::NotFound("Post no encontrado".to_string())
}

fn to_responses(posts: Vec<Post>) -> Vec<PostResponse> {
    posts.iter().map(PostResponse::from).collect()
}

/// GET /api/posts
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.get_all().await;
    Ok(HttpResponse::Ok().json(ApiResponse::list(to_responses(posts))))
}

/// GET /api/posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<u64>,
) -> AppResult<HttpResponse> {
    let post = state
        .posts
        .get_by_id(path.into_inner())
        .await
        .ok_or_else(post_not_found)?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(PostResponse::from(post))))
}

/// POST /api/posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let new_post = body
        .into_inner()
        .into_new_post()
        .ok_or_else(|| AppError::BadRequest("Título y contenido son requeridos".to_string()))?;

    let post = state.posts.create(new_post).await?;
    tracing::info!(post_id = post.id, "Post created via API");

    Ok(HttpResponse::Created()
        .json(ApiResponse::ok(PostResponse::from(post)).with_message("Post creado exitosamente")))
}

/// PUT /api/posts/{id}
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<u64>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let patch = PostPatch::from(body.into_inner());
    if patch.is_empty() {
        return Err(AppError::BadRequest(
            "No se proporcionaron campos para actualizar".to_string(),
        ));
    }

    let post = state
        .posts
        .update(id, patch)
        .await?
        .ok_or_else(post_not_found)?;
    tracing::info!(post_id = id, "Post updated via API");

    Ok(HttpResponse::Ok().json(
        ApiResponse::ok(PostResponse::from(post)).with_message("Post actualizado exitosamente"),
    ))
}

/// DELETE /api/posts/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<u64>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    if !state.posts.delete(id).await {
        return Err(post_not_found());
    }
    tracing::info!(post_id = id, "Post deleted via API");

    Ok(HttpResponse::Ok().json(ApiResponse::message("Post eliminado exitosamente")))
}

/// GET /api/search?q=term
pub async fn search_posts(
    state: web::Data<AppState>,
    query: web::Query<SearchQuery>,
) -> AppResult<HttpResponse> {
    let term = query.term().ok_or_else(|| {
        AppError::BadRequest("El parámetro de búsqueda 'q' es requerido".to_string())
    })?;

    let posts = state.posts.search(term).await;
    tracing::debug!(query = term, results = posts.len(), "Search via API");

    Ok(HttpResponse::Ok().json(ApiResponse::list(to_responses(posts)).with_query(term)))
}
