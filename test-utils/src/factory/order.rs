//! Order factory for creating test orders and their product associations.

use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test orders owned by a customer account.
pub struct OrderFactory<'a> {
    db: &'a DatabaseConnection,
    customer_account_id: i32,
    order_date: NaiveDate,
    product_ids: Vec<i32>,
}

impl<'a> OrderFactory<'a> {
    /// Creates a new OrderFactory for the given account.
    ///
    /// Defaults:
    /// - order_date: today (UTC)
    /// - product_ids: empty
    pub fn new(db: &'a DatabaseConnection, customer_account_id: i32) -> Self {
        Self {
            db,
            customer_account_id,
            order_date: Utc::now().date_naive(),
            product_ids: Vec::new(),
        }
    }

    pub fn order_date(mut self, order_date: NaiveDate) -> Self {
        self.order_date = order_date;
        self
    }

    /// Sets the products linked to the order through the association table.
    pub fn products(mut self, product_ids: &[i32]) -> Self {
        self.product_ids = product_ids.to_vec();
        self
    }

    /// Inserts the order, then one association row per product.
    pub async fn build(self) -> Result<entity::order::Model, DbErr> {
        let order = entity::order::ActiveModel {
            order_date: ActiveValue::Set(self.order_date),
            customer_account_id: ActiveValue::Set(self.customer_account_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        for product_id in self.product_ids {
            entity::order_product::ActiveModel {
                order_id: ActiveValue::Set(order.id),
                product_id: ActiveValue::Set(product_id),
            }
            .insert(self.db)
            .await?;
        }

        Ok(order)
    }
}

/// Creates an order without products for the given account.
pub async fn create_order(
    db: &DatabaseConnection,
    customer_account_id: i32,
) -> Result<entity::order::Model, DbErr> {
    OrderFactory::new(db, customer_account_id).build().await
}
