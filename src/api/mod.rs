//! API handlers for the library REST endpoints

pub mod books;
pub mod home;
pub mod openapi;

use axum::{
    extract::{FromRequest, FromRequestParts},
    http::Uri,
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{error::AppError, AppState};

/// JSON body extractor whose rejections map to `AppError`
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

/// Path extractor whose rejections map to `AppError`
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct ApiPath<T>(pub T);

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let docs_enabled = state.config.docs.enabled;

    let api = Router::new()
        .route("/", get(home::home))
        .route("/books", get(books::list_books).post(books::create_book))
        .route(
            "/books/:id",
            get(books::get_book)
                .put(books::update_book)
                .delete(books::delete_book),
        )
        .fallback(not_found)
        .with_state(state);

    let router = if docs_enabled {
        api.merge(openapi::create_openapi_router())
    } else {
        api
    };

    router.layer(TraceLayer::new_for_http()).layer(cors)
}

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.to_string())
}
