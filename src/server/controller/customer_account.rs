use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::{HeaderMap, StatusCode, Uri},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        customer_account::{
            CreateCustomerAccountDto, CustomerAccountDto, LoginDto, TokenDto,
            UpdateCredentialsDto,
        },
        pagination::PageDto,
    },
    server::{
        controller::{cache_key, param::PaginationParams, CUSTOMER_ACCOUNTS_PREFIX},
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::customer_account::{
            CreateCustomerAccountParam, CustomerAccount, LoginParam, UpdateCredentialsParam,
        },
        service::{auth::AuthService, customer_account::CustomerAccountService},
        state::AppState,
    },
};

/// Tag for grouping customer account endpoints in OpenAPI documentation
pub static CUSTOMER_ACCOUNT_TAG: &str = "customer_account";

/// Register a new customer account.
///
/// Open registration: no token is required and new accounts always get the `user`
/// role. The password is hashed before storage and never returned.
///
/// # Returns
/// - `201 Created` - The created account
/// - `400 Bad Request` - Field errors, including a taken username
#[utoipa::path(
    post,
    path = "/customer-accounts",
    tag = CUSTOMER_ACCOUNT_TAG,
    request_body = CreateCustomerAccountDto,
    responses(
        (status = 201, description = "Successfully created account", body = CustomerAccountDto),
        (status = 400, description = "Invalid account data", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_customer_account(
    State(state): State<AppState>,
    payload: Result<Json<CreateCustomerAccountDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let param = CreateCustomerAccountParam::try_from_dto(payload)?;

    let account = CustomerAccountService::new(&state.db).create(param).await?;

    state.cache.invalidate_prefix(CUSTOMER_ACCOUNTS_PREFIX);

    Ok((StatusCode::CREATED, Json(account.into_dto())))
}

/// List customer accounts.
///
/// # Access Control
/// - `Admin` - Only admins can list accounts
///
/// # Returns
/// - `200 OK` - Page of accounts ordered by ID
/// - `400 Bad Request` - `page` is past the largest representable offset
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is not an admin
#[utoipa::path(
    get,
    path = "/customer-accounts",
    tag = CUSTOMER_ACCOUNT_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10, max: 100)")
    ),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Successfully retrieved accounts", body = PageDto<CustomerAccountDto>),
        (status = 400, description = "Page out of range", body = ValidationErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_customer_accounts(
    State(state): State<AppState>,
    headers: HeaderMap,
    uri: Uri,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let param = params.into_param()?;

    let body = state
        .cache
        .get_or_try_insert_with(&cache_key(&uri), || async {
            let page = CustomerAccountService::new(&state.db)
                .get_all(param)
                .await?;
            Ok(page.into_dto(CustomerAccount::into_dto))
        })
        .await?;

    Ok((StatusCode::OK, Json(body)))
}

/// Get a customer account by ID.
///
/// # Access Control
/// - `Account(id)` - The account itself or an admin
///
/// # Returns
/// - `200 OK` - The account
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is neither the account nor an admin
/// - `404 Not Found` - No account with that ID
#[utoipa::path(
    get,
    path = "/customer-accounts/{id}",
    tag = CUSTOMER_ACCOUNT_TAG,
    params(
        ("id" = i32, Path, description = "Customer account ID")
    ),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Successfully retrieved account", body = CustomerAccountDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller may not view this account", body = ErrorDto),
        (status = 404, description = "Account not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_customer_account_by_id(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Account(id)])
        .await?;

    let account = CustomerAccountService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(account.into_dto())))
}

/// Update the username and/or password of an account.
///
/// # Access Control
/// - `Account(id)` - The account itself or an admin
///
/// # Returns
/// - `200 OK` - The updated account
/// - `400 Bad Request` - Field errors, including a taken username
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is neither the account nor an admin
/// - `404 Not Found` - No account with that ID
#[utoipa::path(
    patch,
    path = "/customer-accounts/{id}",
    tag = CUSTOMER_ACCOUNT_TAG,
    params(
        ("id" = i32, Path, description = "Customer account ID")
    ),
    request_body = UpdateCredentialsDto,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Successfully updated account", body = CustomerAccountDto),
        (status = 400, description = "Invalid credentials data", body = ValidationErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller may not modify this account", body = ErrorDto),
        (status = 404, description = "Account not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_customer_account(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    payload: Result<Json<UpdateCredentialsDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Account(id)])
        .await?;

    let Json(payload) = payload?;
    let param = UpdateCredentialsParam::try_from_dto(payload)?;

    let account = CustomerAccountService::new(&state.db)
        .update_credentials(id, param)
        .await?;

    state.cache.invalidate_prefix(CUSTOMER_ACCOUNTS_PREFIX);

    Ok((StatusCode::OK, Json(account.into_dto())))
}

/// Exchange a username and password for a bearer token.
///
/// # Returns
/// - `200 OK` - Signed access token and its lifetime in seconds
/// - `400 Bad Request` - Username or password missing
/// - `401 Unauthorized` - Unknown username or wrong password
#[utoipa::path(
    post,
    path = "/customer-accounts/login",
    tag = CUSTOMER_ACCOUNT_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Successfully logged in", body = TokenDto),
        (status = 400, description = "Missing credentials", body = ValidationErrorDto),
        (status = 401, description = "Invalid username or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let param = LoginParam::try_from_dto(payload)?;

    let (account, issued) = AuthService::new(&state.db, &state.tokens)
        .login(param)
        .await?;

    Ok((
        StatusCode::OK,
        Json(TokenDto {
            token: issued.token,
            token_type: "Bearer".to_string(),
            expires_in: issued.expires_in.num_seconds(),
            customer_account_id: account.id,
        }),
    ))
}
