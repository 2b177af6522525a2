//! Order domain models and parameters.

use chrono::NaiveDate;

use crate::{
    model::order::{CreateOrderDto, OrderDto, UpdateOrderDto},
    server::{
        error::validation::ValidationErrors,
        model::product::Product,
        util::validate::{check_ids, parse_date, required},
    },
};

/// An order together with the products it contains.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: i32,
    pub order_date: NaiveDate,
    pub customer_account_id: i32,
    /// Products ordered by ID.
    pub products: Vec<Product>,
}

impl Order {
    /// Sum of the prices of every product in the order.
    pub fn total_price(&self) -> f64 {
        self.products.iter().map(|p| p.price).sum()
    }

    pub fn into_dto(self) -> OrderDto {
        let total_price = self.total_price();

        OrderDto {
            id: self.id,
            order_date: self.order_date,
            customer_account_id: self.customer_account_id,
            products: self.products.into_iter().map(Product::into_dto).collect(),
            total_price,
        }
    }

    /// Converts an entity model and its loaded products to an order domain model.
    pub fn from_entity(entity: entity::order::Model, products: Vec<Product>) -> Self {
        Self {
            id: entity.id,
            order_date: entity.order_date,
            customer_account_id: entity.customer_account_id,
            products,
        }
    }
}

/// Order creation payload after shape validation.
///
/// Product and account existence are checked by the service.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateOrderParam {
    /// `None` means today.
    pub order_date: Option<NaiveDate>,
    /// `None` means the caller's own account.
    pub customer_account_id: Option<i32>,
    /// Sorted and deduplicated.
    pub product_ids: Vec<i32>,
}

impl CreateOrderParam {
    pub fn try_from_dto(dto: CreateOrderDto) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let order_date = dto
            .order_date
            .as_deref()
            .and_then(|d| parse_date(&mut errors, "order_date", d));

        let product_ids = required(&mut errors, "product_ids", dto.product_ids)
            .map(|ids| check_ids(&mut errors, "product_ids", ids));

        match product_ids {
            Some(product_ids) if errors.is_empty() => Ok(Self {
                order_date,
                customer_account_id: dto.customer_account_id,
                product_ids,
            }),
            _ => Err(errors),
        }
    }
}

/// Validated partial order update.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateOrderParam {
    pub order_date: Option<NaiveDate>,
    /// Replaces the full product set when present.
    pub product_ids: Option<Vec<i32>>,
}

impl UpdateOrderParam {
    pub fn try_from_dto(dto: UpdateOrderDto) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if dto.order_date.is_none() && dto.product_ids.is_none() {
            errors.add("_schema", "No fields to update.");
        }

        let order_date = dto
            .order_date
            .as_deref()
            .and_then(|d| parse_date(&mut errors, "order_date", d));
        let product_ids = dto
            .product_ids
            .map(|ids| check_ids(&mut errors, "product_ids", ids));

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(Self {
            order_date,
            product_ids,
        })
    }
}

/// Parameters for listing orders.
#[derive(Debug, Clone, PartialEq)]
pub struct GetOrdersParam {
    pub page: u64,
    pub per_page: u64,
    /// Restricts the listing to one account's orders.
    pub customer_account_id: Option<i32>,
}
