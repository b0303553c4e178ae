//! HTTP handlers for the products API

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use axum_helpers::{
    errors::responses::{
        BadRequestResponse, BadRequestValidationResponse, InternalServerErrorResponse,
        NotFoundResponse,
    },
    ErrorResponse, IdPath, ValidatedJson,
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::entity;
use crate::error::{ProductError, ProductResult};
use crate::models::ProductView;
use crate::repository::ProductRepository;
use crate::service::ProductService;

#[derive(OpenApi)]
#[openapi(
    paths(list_products, create_product, get_product, update_product, delete_product),
    components(
        schemas(ProductView, ErrorResponse),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = entity::Model::TAG, description = "Operações de gerenciamento de produtos")
    )
)]
pub struct ApiDoc;

type SharedService<R> = State<Arc<ProductService<R>>>;

/// `/produtos` and `/produtos/{id}` with the service as state
pub fn router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/produtos", get(list_products).post(create_product))
        .route(
            "/produtos/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        .with_state(shared_service)
}

/// List all products
#[utoipa::path(
    get,
    path = "/produtos",
    tag = entity::Model::TAG,
    responses(
        (status = 200, description = "Lista de produtos", body = Vec<ProductView>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_products<R: ProductRepository>(
    State(service): SharedService<R>,
) -> ProductResult<Json<Vec<ProductView>>> {
    let products = service.list_products().await?;
    Ok(Json(products))
}

/// Create a product
#[utoipa::path(
    post,
    path = "/produtos",
    tag = entity::Model::TAG,
    request_body = ProductView,
    responses(
        (status = 201, description = "Produto criado", body = ProductView),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_product<R: ProductRepository>(
    State(service): SharedService<R>,
    ValidatedJson(input): ValidatedJson<ProductView>,
) -> ProductResult<impl IntoResponse> {
    let product = service.create_product(input).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// Get a product by id
#[utoipa::path(
    get,
    path = "/produtos/{id}",
    tag = entity::Model::TAG,
    params(
        ("id" = i64, Path, description = "Product id")
    ),
    responses(
        (status = 200, description = "Produto encontrado", body = ProductView),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_product<R: ProductRepository>(
    State(service): SharedService<R>,
    IdPath(id): IdPath,
) -> ProductResult<Json<ProductView>> {
    let product = service.get_product(id).await?;
    Ok(Json(product))
}

/// Replace a product
#[utoipa::path(
    put,
    path = "/produtos/{id}",
    tag = entity::Model::TAG,
    params(
        ("id" = i64, Path, description = "Product id")
    ),
    request_body = ProductView,
    responses(
        (status = 200, description = "Produto atualizado", body = ProductView),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_product<R: ProductRepository>(
    State(service): SharedService<R>,
    IdPath(id): IdPath,
    ValidatedJson(input): ValidatedJson<ProductView>,
) -> ProductResult<Json<ProductView>> {
    let product = service.update_product(id, input).await?;
    Ok(Json(product))
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/produtos/{id}",
    tag = entity::Model::TAG,
    params(
        ("id" = i64, Path, description = "Product id")
    ),
    responses(
        (status = 204, description = "Produto removido"),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_product<R: ProductRepository>(
    State(service): SharedService<R>,
    IdPath(id): IdPath,
) -> ProductResult<impl IntoResponse> {
    if !service.delete_product(id).await? {
        return Err(ProductError::NotFound(id));
    }
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_both_paths() {
        let doc = ApiDoc::openapi();

        assert!(doc.paths.paths.contains_key("/produtos"));
        assert!(doc.paths.paths.contains_key("/produtos/{id}"));

        let schemas = doc.components.expect("components").schemas;
        assert!(schemas.contains_key("ProductView"));
        assert!(schemas.contains_key("ErrorResponse"));
    }
}
