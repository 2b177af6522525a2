use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::{HeaderMap, StatusCode, Uri},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        order::{CreateOrderDto, OrderDto, UpdateOrderDto},
        pagination::PageDto,
    },
    server::{
        controller::{cache_key, param::PaginationParams, ORDERS_PREFIX},
        error::{internal::InternalError, AppError},
        middleware::auth::{ensure_permissions, AuthGuard, Permission},
        model::order::{CreateOrderParam, GetOrdersParam, Order, UpdateOrderParam},
        service::order::OrderService,
        state::AppState,
    },
};

/// Tag for grouping order endpoints in OpenAPI documentation
pub static ORDER_TAG: &str = "order";

/// Place an order.
///
/// `customer_account_id` defaults to the caller. Only admins may place orders for
/// other accounts.
///
/// # Access Control
/// - Any authenticated account for its own orders
/// - `Admin` for orders on behalf of another account
///
/// # Returns
/// - `201 Created` - The created order with its products and total
/// - `400 Bad Request` - Field errors, including unknown products or account
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Non-admin ordering for another account
#[utoipa::path(
    post,
    path = "/orders",
    tag = ORDER_TAG,
    request_body = CreateOrderDto,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Successfully created order", body = OrderDto),
        (status = 400, description = "Invalid order data", body = ValidationErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller may not order for this account", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_order(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<CreateOrderDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let Json(payload) = payload?;
    let param = CreateOrderParam::try_from_dto(payload)?;

    let owner_id = param.customer_account_id.unwrap_or(caller.id);
    ensure_permissions(&caller, &[Permission::Account(owner_id)])?;

    let order = OrderService::new(&state.db)
        .create(owner_id, param.order_date, &param.product_ids)
        .await?;

    state.cache.invalidate_prefix(ORDERS_PREFIX);

    Ok((StatusCode::CREATED, Json(order.into_dto())))
}

/// List orders.
///
/// Admins see every order; other accounts see only their own.
///
/// # Returns
/// - `200 OK` - Page of orders ordered by ID
/// - `400 Bad Request` - `page` is past the largest representable offset
/// - `401 Unauthorized` - Missing or invalid token
#[utoipa::path(
    get,
    path = "/orders",
    tag = ORDER_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10, max: 100)")
    ),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Successfully retrieved orders", body = PageDto<OrderDto>),
        (status = 400, description = "Page out of range", body = ValidationErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_orders(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let page = params.into_param()?;
    let orders = OrderService::new(&state.db)
        .get_all(GetOrdersParam {
            page: page.page,
            per_page: page.per_page,
            customer_account_id: (!caller.is_admin()).then_some(caller.id),
        })
        .await?;

    Ok((StatusCode::OK, Json(orders.into_dto(Order::into_dto))))
}

/// Get an order by ID.
///
/// Cached per path. Ownership is checked against the cached body, so a cache hit is
/// never served to another account.
///
/// # Access Control
/// - The owning account or an admin
///
/// # Returns
/// - `200 OK` - The order with its products and total
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is neither the owner nor an admin
/// - `404 Not Found` - No order with that ID
#[utoipa::path(
    get,
    path = "/orders/{id}",
    tag = ORDER_TAG,
    params(
        ("id" = i32, Path, description = "Order ID")
    ),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Successfully retrieved order", body = OrderDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller may not view this order", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_order_by_id(
    State(state): State<AppState>,
    headers: HeaderMap,
    uri: Uri,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let body = state
        .cache
        .get_or_try_insert_with(&cache_key(&uri), || async {
            let order = OrderService::new(&state.db).get_by_id(id).await?;
            Ok(order.into_dto())
        })
        .await?;

    let order: OrderDto = serde_json::from_value(body).map_err(InternalError::Serialize)?;
    ensure_permissions(&caller, &[Permission::Account(order.customer_account_id)])?;

    Ok((StatusCode::OK, Json(order)))
}

/// Update an order's date and/or products.
///
/// `product_ids` replaces the whole product set.
///
/// # Access Control
/// - The owning account or an admin
///
/// # Returns
/// - `200 OK` - The updated order
/// - `400 Bad Request` - Field errors, including unknown products
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is neither the owner nor an admin
/// - `404 Not Found` - No order with that ID
#[utoipa::path(
    patch,
    path = "/orders/{id}",
    tag = ORDER_TAG,
    params(
        ("id" = i32, Path, description = "Order ID")
    ),
    request_body = UpdateOrderDto,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Successfully updated order", body = OrderDto),
        (status = 400, description = "Invalid order data", body = ValidationErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller may not modify this order", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_order(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    payload: Result<Json<UpdateOrderDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let service = OrderService::new(&state.db);

    let existing = service.get_by_id(id).await?;
    ensure_permissions(&caller, &[Permission::Account(existing.customer_account_id)])?;

    let Json(payload) = payload?;
    let param = UpdateOrderParam::try_from_dto(payload)?;

    let order = service.update(id, param).await?;

    state.cache.invalidate_prefix(ORDERS_PREFIX);

    Ok((StatusCode::OK, Json(order.into_dto())))
}
