//! HTTP handlers for the products API.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::get;
use axum::Router;
use std::sync::Arc;

use axum_helpers::errors::responses::{
    BadRequestObjectIdResponse, BadRequestValidationResponse, InternalServerErrorResponse,
    NotFoundResponse,
};
use axum_helpers::{ObjectIdPath, ValidatedJson};

use crate::error::ProductError;
use crate::models::{CreateProduct, Product, UpdateProduct};
use crate::repository::ProductRepository;
use crate::service::ProductService;

/// Build the products router with all CRUD routes.
pub fn router<R>(service: ProductService<R>) -> Router
where
    R: ProductRepository + 'static,
{
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route(
            "/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        .with_state(Arc::new(service))
}

/// Create a new product
#[utoipa::path(
    post,
    path = "/api/products",
    tag = "products",
    request_body = CreateProduct,
    responses(
        (status = 201, description = "Product created", body = Product),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
pub async fn create_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateProduct>,
) -> Result<(StatusCode, Json<Product>), ProductError> {
    let product = service.create_product(input).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// List all products
#[utoipa::path(
    get,
    path = "/api/products",
    tag = "products",
    responses(
        (status = 200, description = "All products", body = [Product]),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
pub async fn list_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
) -> Result<Json<Vec<Product>>, ProductError> {
    let products = service.list_products().await?;
    Ok(Json(products))
}

/// Get a product by id
#[utoipa::path(
    get,
    path = "/api/products/{id}",
    tag = "products",
    params(("id" = String, Path, description = "Product ObjectId (24-character hex)")),
    responses(
        (status = 200, description = "Product found", body = Product),
        (status = 400, response = BadRequestObjectIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
pub async fn get_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    ObjectIdPath(id): ObjectIdPath,
) -> Result<Json<Product>, ProductError> {
    let product = service.get_product(id).await?;
    Ok(Json(product))
}

/// Update a product by id
#[utoipa::path(
    put,
    path = "/api/products/{id}",
    tag = "products",
    params(("id" = String, Path, description = "Product ObjectId (24-character hex)")),
    request_body = UpdateProduct,
    responses(
        (status = 200, description = "Updated product", body = Product),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
pub async fn update_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    ObjectIdPath(id): ObjectIdPath,
    ValidatedJson(input): ValidatedJson<UpdateProduct>,
) -> Result<Json<Product>, ProductError> {
    let product = service.update_product(id, input).await?;
    Ok(Json(product))
}

/// Delete a product by id
///
/// Returns the deleted record so clients can confirm what was removed.
#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    tag = "products",
    params(("id" = String, Path, description = "Product ObjectId (24-character hex)")),
    responses(
        (status = 200, description = "Deleted product", body = Product),
        (status = 400, response = BadRequestObjectIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
pub async fn delete_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    ObjectIdPath(id): ObjectIdPath,
) -> Result<Json<Product>, ProductError> {
    let product = service.delete_product(id).await?;
    Ok(Json(product))
}
