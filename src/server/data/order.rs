//! Order data repository for database operations.
//!
//! Orders are stored as an `orders` row plus one `order_product_association` row per
//! product. Multi-row writes run inside a transaction, and reads load the associated
//! products with two batched queries rather than one query per order.

use std::collections::HashMap;

use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::model::{order::Order, product::Product};

pub struct OrderRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OrderRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an order and its product associations in one transaction.
    ///
    /// # Arguments
    /// - `order_date` - Date of the order
    /// - `customer_account_id` - Owning account, which must exist
    /// - `product_ids` - Distinct IDs of existing products
    ///
    /// # Returns
    /// - `Ok(Order)` - The created order with its products
    /// - `Err(DbErr)` - Database error; nothing is written
    pub async fn create(
        &self,
        order_date: NaiveDate,
        customer_account_id: i32,
        product_ids: &[i32],
    ) -> Result<Order, DbErr> {
        let txn = self.db.begin().await?;

        let order = entity::order::ActiveModel {
            order_date: ActiveValue::Set(order_date),
            customer_account_id: ActiveValue::Set(customer_account_id),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        insert_associations(&txn, order.id, product_ids).await?;
        let mut products = load_products(&txn, &[order.id]).await?;

        txn.commit().await?;

        let products = products.remove(&order.id).unwrap_or_default();
        Ok(Order::from_entity(order, products))
    }

    /// Gets an order by ID with its products.
    ///
    /// # Returns
    /// - `Ok(Some(Order))` - Order found
    /// - `Ok(None)` - No order with that ID
    /// - `Err(DbErr)` - Database error
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Order>, DbErr> {
        let Some(order) = entity::prelude::Order::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut products = load_products(self.db, &[order.id]).await?;
        let products = products.remove(&order.id).unwrap_or_default();

        Ok(Some(Order::from_entity(order, products)))
    }

    /// Gets orders with pagination, ordered by ID.
    ///
    /// # Arguments
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of orders per page
    /// - `customer_account_id` - Restricts the listing to one account when set
    ///
    /// # Returns
    /// - `Ok((orders, total))` - Orders for the requested page and the total count
    /// - `Err(DbErr)` - Database error
    pub async fn get_paginated(
        &self,
        page: u64,
        per_page: u64,
        customer_account_id: Option<i32>,
    ) -> Result<(Vec<Order>, u64), DbErr> {
        let mut query = entity::prelude::Order::find();
        if let Some(account_id) = customer_account_id {
            query = query.filter(entity::order::Column::CustomerAccountId.eq(account_id));
        }

        let paginator = query
            .order_by_asc(entity::order::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page).await?;

        let order_ids: Vec<i32> = entities.iter().map(|o| o.id).collect();
        let mut products = load_products(self.db, &order_ids).await?;

        let orders = entities
            .into_iter()
            .map(|order| {
                let items = products.remove(&order.id).unwrap_or_default();
                Order::from_entity(order, items)
            })
            .collect();

        Ok((orders, total))
    }

    /// Updates the date and/or product set of an order in one transaction.
    ///
    /// When `product_ids` is set, every existing association is replaced.
    ///
    /// # Returns
    /// - `Ok(Some(Order))` - The updated order
    /// - `Ok(None)` - No order with that ID
    /// - `Err(DbErr)` - Database error; nothing is written
    pub async fn update(
        &self,
        id: i32,
        order_date: Option<NaiveDate>,
        product_ids: Option<&[i32]>,
    ) -> Result<Option<Order>, DbErr> {
        let txn = self.db.begin().await?;

        let Some(mut order) = entity::prelude::Order::find_by_id(id).one(&txn).await? else {
            return Ok(None);
        };

        if let Some(order_date) = order_date {
            let mut active = order.into_active_model();
            active.order_date = ActiveValue::Set(order_date);
            order = active.update(&txn).await?;
        }

        if let Some(product_ids) = product_ids {
            entity::prelude::OrderProduct::delete_many()
                .filter(entity::order_product::Column::OrderId.eq(id))
                .exec(&txn)
                .await?;
            insert_associations(&txn, id, product_ids).await?;
        }

        let mut products = load_products(&txn, &[id]).await?;

        txn.commit().await?;

        let products = products.remove(&id).unwrap_or_default();
        Ok(Some(Order::from_entity(order, products)))
    }
}

async fn insert_associations<C: ConnectionTrait>(
    db: &C,
    order_id: i32,
    product_ids: &[i32],
) -> Result<(), DbErr> {
    for product_id in product_ids {
        entity::order_product::ActiveModel {
            order_id: ActiveValue::Set(order_id),
            product_id: ActiveValue::Set(*product_id),
        }
        .insert(db)
        .await?;
    }

    Ok(())
}

/// Loads the products of each order, keyed by order ID, each list ordered by product ID.
async fn load_products<C: ConnectionTrait>(
    db: &C,
    order_ids: &[i32],
) -> Result<HashMap<i32, Vec<Product>>, DbErr> {
    if order_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let associations = entity::prelude::OrderProduct::find()
        .filter(entity::order_product::Column::OrderId.is_in(order_ids.to_vec()))
        .all(db)
        .await?;

    let mut product_ids: Vec<i32> = associations.iter().map(|a| a.product_id).collect();
    product_ids.sort_unstable();
    product_ids.dedup();

    if product_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let products: HashMap<i32, Product> = entity::prelude::Product::find()
        .filter(entity::product::Column::Id.is_in(product_ids))
        .all(db)
        .await?
        .into_iter()
        .map(|p| (p.id, Product::from_entity(p)))
        .collect();

    let mut by_order: HashMap<i32, Vec<Product>> = HashMap::new();
    for association in associations {
        if let Some(product) = products.get(&association.product_id) {
            by_order
                .entry(association.order_id)
                .or_default()
                .push(product.clone());
        }
    }
    for items in by_order.values_mut() {
        items.sort_by_key(|p| p.id);
    }

    Ok(by_order)
}
