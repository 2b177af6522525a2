use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::product::ProductDto;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct OrderDto {
    pub id: i32,
    pub order_date: NaiveDate,
    pub customer_account_id: i32,
    pub products: Vec<ProductDto>,
    /// Sum of the prices of the products in the order.
    pub total_price: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, ToSchema)]
pub struct CreateOrderDto {
    /// `YYYY-MM-DD`, defaults to today (UTC).
    pub order_date: Option<String>,
    /// Defaults to the authenticated account.
    pub customer_account_id: Option<i32>,
    pub product_ids: Option<Vec<i32>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, ToSchema)]
pub struct UpdateOrderDto {
    pub order_date: Option<String>,
    /// Replaces the full set of products in the order.
    pub product_ids: Option<Vec<i32>>,
}
