use axum_helpers::errors::responses::{
    BadRequestObjectIdResponse, BadRequestValidationResponse, InternalServerErrorResponse,
    NotFoundResponse,
};
use utoipa::OpenApi;

/// Aggregated OpenAPI document, served at `/api-docs/openapi.json`.
#[derive(OpenApi)]
#[openapi(
    paths(
        domain_products::handlers::create_product,
        domain_products::handlers::list_products,
        domain_products::handlers::get_product,
        domain_products::handlers::update_product,
        domain_products::handlers::delete_product,
    ),
    components(
        schemas(
            domain_products::Product,
            domain_products::CreateProduct,
            domain_products::UpdateProduct,
        ),
        responses(
            InternalServerErrorResponse,
            BadRequestValidationResponse,
            BadRequestObjectIdResponse,
            NotFoundResponse,
        )
    ),
    tags(
        (name = "products", description = "Product catalog management")
    ),
    info(
        title = "Products API",
        description = "REST API for managing catalog products backed by MongoDB"
    )
)]
pub struct ApiDoc;
