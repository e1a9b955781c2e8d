//! Browser-facing HTML pages.

use actix_web::error::{InternalError, PathError};
use actix_web::http::header::{self, ContentType};
use actix_web::{HttpRequest, HttpResponse, web};
use serde::Deserialize;

use devblog_core::domain::{CONTENT_REQUIRED, NewPost, TITLE_REQUIRED};
use devblog_shared::dto::SearchQuery;

use crate::state::AppState;
use crate::views::{self, FormValues};

/// Fields submitted by the create form. Missing fields arrive as empty strings.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PostForm {
    pub title: String,
    pub content: String,
    pub author: String,
}

impl PostForm {
    fn errors(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if self.title.trim().is_empty() {
            errors.push(TITLE_REQUIRED.to_string());
        }
        if self.content.trim().is_empty() {
            errors.push(CONTENT_REQUIRED.to_string());
        }
        errors
    }

    fn values(&self) -> FormValues<'_> {
        FormValues {
            title: &self.title,
            content: &self.content,
            author: &self.author,
        }
    }
}

fn html(body: String) -> HttpResponse {
    HttpResponse::Ok().content_type(ContentType::html()).body(body)
}

fn not_found_response() -> HttpResponse {
    HttpResponse::NotFound()
        .content_type(ContentType::html())
        .body(views::not_found_page())
}

/// GET /
pub async fn index(state: web::Data<AppState>) -> HttpResponse {
    let posts = state.posts.get_recent(state.recent_posts_limit).await;
    html(views::index_page(&posts))
}

/// GET /post/{id}
pub async fn show_post(state: web::Data<AppState>, path: web::Path<u64>) -> HttpResponse {
    match state.posts.get_by_id(path.into_inner()).await {
        Some(post) => html(views::post_page(&post)),
        None => not_found_response(),
    }
}

/// GET /create
pub async fn new_post_form() -> HttpResponse {
    html(views::create_page(&FormValues::default(), &[]))
}

/// POST /create
pub async fn submit_post(state: web::Data<AppState>, form: web::Form<PostForm>) -> HttpResponse {
    let form = form.into_inner();
    let errors = form.errors();
    if !errors.is_empty() {
        return html(views::create_page(&form.values(), &errors));
    }

    let new_post = NewPost::new(form.title.clone(), form.content.clone())
        .with_author(form.author.clone());
    match state.posts.create(new_post).await {
        Ok(post) => {
            tracing::info!(post_id = post.id, "Post created from form");
            HttpResponse::SeeOther()
                .insert_header((header::LOCATION, format!("/post/{}", post.id)))
                .finish()
        }
        Err(err) => html(views::create_page(
            &form.values(),
            &[err.message().to_string()],
        )),
    }
}

/// GET /search?q=term
///
/// A blank query renders the empty search page rather than an error.
pub async fn search(state: web::Data<AppState>, query: web::Query<SearchQuery>) -> HttpResponse {
    match query.term() {
        Some(term) => {
            let posts = state.posts.search(term).await;
            html(views::search_page(term, Some(posts.as_slice())))
        }
        None => html(views::search_page("", None)),
    }
}

/// Fallback for unknown paths.
pub async fn not_found() -> HttpResponse {
    not_found_response()
}

/// A non-numeric post id names no post.
pub fn path_error_handler(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    InternalError::from_response(err, not_found_response()).into()
}

#[cfg(test)]
mod tests {
    use actix_web::http::{StatusCode, header};
    use actix_web::{App, test, web};

    use crate::handlers::{configure_routes, test_support::sample_state};
    use crate::state::AppState;

    async fn call(state: &AppState, req: test::TestRequest) -> (StatusCode, String) {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state.clone()))
                .configure(configure_routes),
        )
        .await;

        let res = test::call_service(&app, req.to_request()).await;
        let status = res.status();
        let body = test::read_body(res).await;
        (status, String::from_utf8_lossy(&body).into_owned())
    }

    async fn get(state: &AppState, uri: &str) -> (StatusCode, String) {
        call(state, test::TestRequest::get().uri(uri)).await
    }

    #[actix_web::test]
    async fn test_index_lists_recent_posts() {
        let state = sample_state();
        let (status, body) = get(&state, "/").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("DevBlog"));
        assert!(body.contains("Posts Recientes"));
        assert!(body.contains("Bienvenido a DevBlog"));
        assert!(body.contains("Mi experiencia con Docker"));
        assert!(body.contains("Leer más"));
        assert!(body.contains(r#"href="/create""#));

        let newest = body.find("Mi experiencia con Docker").unwrap();
        let oldest = body.find("Bienvenido a DevBlog</a>").unwrap();
        assert!(newest < oldest);
    }

    #[actix_web::test]
    async fn test_view_post() {
        let state = sample_state();
        let (status, body) = get(&state, "/post/1").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Bienvenido a DevBlog"));
        assert!(body.contains("DevOps Student"));
    }

    #[actix_web::test]
    async fn test_view_missing_post() {
        let state = sample_state();
        assert_eq!(get(&state, "/post/999").await.0, StatusCode::NOT_FOUND);
        assert_eq!(get(&state, "/post/abc").await.0, StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_create_form() {
        let state = sample_state();
        let (status, body) = get(&state, "/create").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Crear Nuevo Post"));
        assert!(body.contains("<form"));
        assert!(body.contains(r#"name="title""#));
        assert!(body.contains(r#"name="content""#));
    }

    #[actix_web::test]
    async fn test_submit_post_redirects_to_new_post() {
        let state = sample_state();
        let (status, _) = call(
            &state,
            test::TestRequest::post().uri("/create").set_form([
                ("title", "Test Post"),
                ("content", "Este es un post de prueba.\n\nCon múltiples párrafos."),
                ("author", "Test Author"),
            ]),
        )
        .await;
        assert_eq!(status, StatusCode::SEE_OTHER);

        let (status, body) = get(&state, "/post/3").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Test Post"));
        assert!(body.contains("Test Author"));
        assert!(body.contains("<p>Este es un post de prueba.</p>"));
        assert!(body.contains("<p>Con múltiples párrafos.</p>"));
    }

    #[actix_web::test]
    async fn test_submit_post_location_header() {
        let state = sample_state();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state.clone()))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/create")
            .set_form([("title", "T"), ("content", "C")])
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.headers().get(header::LOCATION).unwrap(), "/post/3");
        assert_eq!(state.posts.get_by_id(3).await.unwrap().author, "Anónimo");
    }

    #[actix_web::test]
    async fn test_submit_post_validation_errors() {
        let state = sample_state();
        let (status, body) = call(
            &state,
            test::TestRequest::post().uri("/create").set_form([
                ("title", ""),
                ("content", "Contenido válido"),
                ("author", "Test Author"),
            ]),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("El título es requerido"));
        assert!(body.contains("Contenido válido"));
        assert_eq!(state.posts.count().await, 2);
    }

    #[actix_web::test]
    async fn test_search_page() {
        let state = sample_state();

        let (status, body) = get(&state, "/search").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Búsqueda de Posts"));
        assert!(body.contains("<form"));

        let (_, body) = get(&state, "/search?q=Docker").await;
        assert!(body.contains("Mi experiencia con Docker"));

        let (status, body) = get(&state, "/search?q=TerminoQueNoExiste").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("No se encontraron resultados"));
    }

    #[actix_web::test]
    async fn test_unknown_path_renders_not_found_page() {
        let state = sample_state();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(configure_routes)
                .default_service(web::to(super::not_found)),
        )
        .await;

        let req = test::TestRequest::get().uri("/no/such/page").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }
}
