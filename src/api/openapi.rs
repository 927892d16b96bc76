//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{books, home};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Library REST API",
        version = "1.0.0",
        description = "CRUD over an in-memory book catalog"
    ),
    paths(
        home::home,
        books::list_books,
        books::get_book,
        books::create_book,
        books::update_book,
        books::delete_book,
    ),
    components(
        schemas(
            crate::models::book::Book,
            crate::models::book::BookPayload,
            crate::models::book::BookList,
            crate::models::book::MessageResponse,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "status", description = "Service status"),
        (name = "books", description = "Book management")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
