use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::{ErrorDto, HealthDto, ValidationErrorDto},
        customer_account::{
            CreateCustomerAccountDto, CustomerAccountDto, LoginDto, TokenDto,
            UpdateCredentialsDto,
        },
        order::{CreateOrderDto, OrderDto, UpdateOrderDto},
        product::{CreateProductDto, ProductDto, UpdateProductDto},
    },
    server::{
        controller::{customer_account, health, order, product},
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Storefront API"),
    paths(
        health::health,
        product::create_product,
        product::get_products,
        product::get_product_by_id,
        product::update_product,
        customer_account::create_customer_account,
        customer_account::get_customer_accounts,
        customer_account::get_customer_account_by_id,
        customer_account::update_customer_account,
        customer_account::login,
        order::create_order,
        order::get_orders,
        order::get_order_by_id,
        order::update_order,
    ),
    components(schemas(
        ErrorDto,
        ValidationErrorDto,
        HealthDto,
        ProductDto,
        CreateProductDto,
        UpdateProductDto,
        CustomerAccountDto,
        CreateCustomerAccountDto,
        UpdateCredentialsDto,
        LoginDto,
        TokenDto,
        OrderDto,
        CreateOrderDto,
        UpdateOrderDto,
    )),
    modifiers(&BearerAuth),
    tags(
        (name = health::HEALTH_TAG, description = "Liveness"),
        (name = product::PRODUCT_TAG, description = "Product catalogue"),
        (name = customer_account::CUSTOMER_ACCOUNT_TAG, description = "Customer accounts and login"),
        (name = order::ORDER_TAG, description = "Orders"),
    )
)]
pub struct ApiDoc;

struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .route(
            "/products",
            get(product::get_products).post(product::create_product),
        )
        .route(
            "/products/{id}",
            get(product::get_product_by_id).patch(product::update_product),
        )
        .route(
            "/customer-accounts",
            get(customer_account::get_customer_accounts)
                .post(customer_account::create_customer_account),
        )
        .route("/customer-accounts/login", post(customer_account::login))
        .route(
            "/customer-accounts/{id}",
            get(customer_account::get_customer_account_by_id)
                .patch(customer_account::update_customer_account),
        )
        .route("/orders", get(order::get_orders).post(order::create_order))
        .route(
            "/orders/{id}",
            get(order::get_order_by_id).patch(order::update_order),
        )
}

/// Builds the complete application: routes, API docs and tower-http layers.
pub fn app(state: AppState) -> Router {
    router()
        .with_state(state)
        .merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
