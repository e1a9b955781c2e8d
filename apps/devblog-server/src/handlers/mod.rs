//! HTTP handlers and route configuration.

mod health;
mod pages;
mod posts;

use actix_web::web;

use crate::middleware::error::{json_error_handler, path_error_handler, query_error_handler};

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::PathConfig::default().error_handler(pages::path_error_handler))
        .service(
            web::scope("/api")
                .app_data(web::JsonConfig::default().error_handler(json_error_handler))
                .app_data(web::PathConfig::default().error_handler(path_error_handler))
                .app_data(web::QueryConfig::default().error_handler(query_error_handler))
                .route("/health", web::get().to(health::health_check))
                .service(
                    web::resource("/posts")
                        .route(web::get().to(posts::list_posts))
                        .route(web::post().to(posts::create_post)),
                )
                .service(
                    web::resource("/posts/{id}")
                        .route(web::get().to(posts::get_post))
                        .route(web::put().to(posts::update_post))
                        .route(web::delete().to(posts::delete_post)),
                )
                .route("/search", web::get().to(posts::search_posts)),
        )
        // HTML pages
        .route("/", web::get().to(pages::index))
        .route("/post/{id}", web::get().to(pages::show_post))
        .service(
            web::resource("/create")
                .route(web::get().to(pages::new_post_form))
                .route(web::post().to(pages::submit_post)),
        )
        .route("/search", web::get().to(pages::search));
}

pub use pages::not_found;

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use devblog_infra::new_store_with_samples;

    use crate::state::AppState;

    /// Fresh state holding only the sample posts.
    pub fn sample_state() -> AppState {
        AppState::with_repository(Arc::new(new_store_with_samples()), 10)
    }
}
