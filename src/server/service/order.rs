//! Order service for business logic.
//!
//! This module provides the `OrderService` which resolves order defaults and checks
//! that every referenced account and product exists before the repository writes
//! anything. Missing references are reported as field errors rather than database
//! constraint failures.

use chrono::{NaiveDate, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        customer_account::CustomerAccountRepository, order::OrderRepository,
        product::ProductRepository,
    },
    error::{validation::ValidationErrors, AppError},
    model::{
        order::{GetOrdersParam, Order, UpdateOrderParam},
        page::Page,
    },
};

/// Service providing business logic for orders.
pub struct OrderService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OrderService<'a> {
    /// Creates a new OrderService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `OrderService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an order for an account.
    ///
    /// # Arguments
    /// - `customer_account_id` - Owner of the order, already authorized by the caller
    /// - `order_date` - Order date, today (UTC) when `None`
    /// - `product_ids` - Distinct product IDs, at least one
    ///
    /// # Returns
    /// - `Ok(Order)` - The created order with its products
    /// - `Err(AppError::Validation)` - The account or one or more products do not exist
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(
        &self,
        customer_account_id: i32,
        order_date: Option<NaiveDate>,
        product_ids: &[i32],
    ) -> Result<Order, AppError> {
        let mut errors = ValidationErrors::new();

        if CustomerAccountRepository::new(self.db)
            .find_by_id(customer_account_id)
            .await?
            .is_none()
        {
            errors.add(
                "customer_account_id",
                format!("Customer account {} does not exist.", customer_account_id),
            );
        }
        self.check_products_exist(&mut errors, product_ids).await?;

        if !errors.is_empty() {
            return Err(errors.into());
        }

        let order_date = order_date.unwrap_or_else(|| Utc::now().date_naive());
        let order = OrderRepository::new(self.db)
            .create(order_date, customer_account_id, product_ids)
            .await?;

        tracing::info!(
            "Created order {} for customer account {} with {} products",
            order.id,
            order.customer_account_id,
            order.products.len()
        );

        Ok(order)
    }

    /// Retrieves an order by ID.
    ///
    /// # Returns
    /// - `Ok(Order)` - Order found
    /// - `Err(AppError::NotFound)` - No order with that ID
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn get_by_id(&self, id: i32) -> Result<Order, AppError> {
        OrderRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Retrieves a page of orders, optionally for a single account.
    pub async fn get_all(&self, param: GetOrdersParam) -> Result<Page<Order>, AppError> {
        let (items, total) = OrderRepository::new(self.db)
            .get_paginated(param.page, param.per_page, param.customer_account_id)
            .await?;

        Ok(Page {
            items,
            total,
            page: param.page,
            per_page: param.per_page,
        })
    }

    /// Updates the date and/or products of an existing order.
    ///
    /// # Returns
    /// - `Ok(Order)` - The updated order
    /// - `Err(AppError::NotFound)` - No order with that ID
    /// - `Err(AppError::Validation)` - One or more products do not exist
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn update(&self, id: i32, param: UpdateOrderParam) -> Result<Order, AppError> {
        if let Some(product_ids) = &param.product_ids {
            let mut errors = ValidationErrors::new();
            self.check_products_exist(&mut errors, product_ids).await?;
            if !errors.is_empty() {
                return Err(errors.into());
            }
        }

        let order = OrderRepository::new(self.db)
            .update(id, param.order_date, param.product_ids.as_deref())
            .await?
            .ok_or_else(|| not_found(id))?;

        tracing::info!("Updated order {}", order.id);

        Ok(order)
    }

    async fn check_products_exist(
        &self,
        errors: &mut ValidationErrors,
        product_ids: &[i32],
    ) -> Result<(), AppError> {
        let found = ProductRepository::new(self.db)
            .find_by_ids(product_ids)
            .await?;

        for id in product_ids {
            if !found.iter().any(|p| p.id == *id) {
                errors.add("product_ids", format!("Product {} does not exist.", id));
            }
        }

        Ok(())
    }
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Order {} not found", id))
}
