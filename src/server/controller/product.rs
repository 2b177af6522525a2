use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::{HeaderMap, StatusCode, Uri},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        pagination::PageDto,
        product::{CreateProductDto, ProductDto, UpdateProductDto},
    },
    server::{
        controller::{cache_key, param::ProductListParams, ORDERS_PREFIX, PRODUCTS_PREFIX},
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::product::{CreateProductParam, Product, UpdateProductParam},
        service::product::ProductService,
        state::AppState,
    },
};

/// Tag for grouping product endpoints in OpenAPI documentation
pub static PRODUCT_TAG: &str = "product";

/// Create a new product.
///
/// # Access Control
/// - `Admin` - Only admins can create products
///
/// # Returns
/// - `201 Created` - The created product
/// - `400 Bad Request` - Field errors keyed by field name
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is not an admin
#[utoipa::path(
    post,
    path = "/products",
    tag = PRODUCT_TAG,
    request_body = CreateProductDto,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Successfully created product", body = ProductDto),
        (status = 400, description = "Invalid product data", body = ValidationErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_product(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<CreateProductDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let Json(payload) = payload?;
    let param = CreateProductParam::try_from_dto(payload)?;

    let product = ProductService::new(&state.db).create(param).await?;

    state.cache.invalidate_prefix(PRODUCTS_PREFIX);

    Ok((StatusCode::CREATED, Json(product.into_dto())))
}

/// List products.
///
/// Public and cached per path and query string. Supports pagination and a name
/// substring filter.
///
/// # Returns
/// - `200 OK` - Page of products ordered by ID
/// - `400 Bad Request` - `page` is past the largest representable offset
#[utoipa::path(
    get,
    path = "/products",
    tag = PRODUCT_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10, max: 100)"),
        ("search" = Option<String>, Query, description = "Name substring filter")
    ),
    responses(
        (status = 200, description = "Successfully retrieved products", body = PageDto<ProductDto>),
        (status = 400, description = "Page out of range", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_products(
    State(state): State<AppState>,
    uri: Uri,
    Query(params): Query<ProductListParams>,
) -> Result<impl IntoResponse, AppError> {
    let param = params.into_param()?;

    let body = state
        .cache
        .get_or_try_insert_with(&cache_key(&uri), || async {
            let page = ProductService::new(&state.db)
                .get_all(param)
                .await?;
            Ok(page.into_dto(Product::into_dto))
        })
        .await?;

    Ok((StatusCode::OK, Json(body)))
}

/// Get a product by ID.
///
/// Public and cached.
///
/// # Returns
/// - `200 OK` - The product
/// - `404 Not Found` - No product with that ID
#[utoipa::path(
    get,
    path = "/products/{id}",
    tag = PRODUCT_TAG,
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved product", body = ProductDto),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_product_by_id(
    State(state): State<AppState>,
    uri: Uri,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let body = state
        .cache
        .get_or_try_insert_with(&cache_key(&uri), || async {
            let product = ProductService::new(&state.db).get_by_id(id).await?;
            Ok(product.into_dto())
        })
        .await?;

    Ok((StatusCode::OK, Json(body)))
}

/// Update a product.
///
/// Only the fields present in the body change; an explicit `null` for `details`
/// clears it. Invalidates cached products and orders, since order bodies embed
/// product data.
///
/// # Access Control
/// - `Admin` - Only admins can update products
///
/// # Returns
/// - `200 OK` - The updated product
/// - `400 Bad Request` - Field errors keyed by field name
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is not an admin
/// - `404 Not Found` - No product with that ID
#[utoipa::path(
    patch,
    path = "/products/{id}",
    tag = PRODUCT_TAG,
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    request_body = UpdateProductDto,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Successfully updated product", body = ProductDto),
        (status = 400, description = "Invalid product data", body = ValidationErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_product(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    payload: Result<Json<UpdateProductDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let Json(payload) = payload?;
    let param = UpdateProductParam::try_from_dto(payload)?;

    let product = ProductService::new(&state.db).update(id, param).await?;

    state.cache.invalidate_prefix(PRODUCTS_PREFIX);
    state.cache.invalidate_prefix(ORDERS_PREFIX);

    Ok((StatusCode::OK, Json(product.into_dto())))
}
