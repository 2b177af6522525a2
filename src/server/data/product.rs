//! Product data repository for database operations.
//!
//! This module provides the `ProductRepository` for creating, querying and updating
//! product records, converting entity models to `Product` domain models at the
//! repository boundary.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::product::{CreateProductParam, Product, UpdateProductParam};

/// Repository providing database operations for products.
pub struct ProductRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProductRepository<'a> {
    /// Creates a new ProductRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `ProductRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new product.
    ///
    /// # Arguments
    /// - `param` - Validated product fields
    ///
    /// # Returns
    /// - `Ok(Product)` - The created product with its assigned ID
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateProductParam) -> Result<Product, DbErr> {
        let entity = entity::product::ActiveModel {
            name: ActiveValue::Set(param.name),
            price: ActiveValue::Set(param.price),
            details: ActiveValue::Set(param.details),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Product::from_entity(entity))
    }

    /// Finds a product by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Product))` - Product found
    /// - `Ok(None)` - No product with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Product>, DbErr> {
        let entity = entity::prelude::Product::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Product::from_entity))
    }

    /// Finds every product whose ID is in `ids`, ordered by ID.
    ///
    /// IDs with no matching product are silently absent from the result.
    pub async fn find_by_ids(&self, ids: &[i32]) -> Result<Vec<Product>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Product::find()
            .filter(entity::product::Column::Id.is_in(ids.to_vec()))
            .order_by_asc(entity::product::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Product::from_entity).collect())
    }

    /// Gets products with pagination, optionally filtered by a name substring.
    ///
    /// # Arguments
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of products per page
    /// - `search` - Substring matched against the product name with SQL `LIKE`
    ///
    /// # Returns
    /// - `Ok((products, total))` - Products for the requested page ordered by ID and the
    ///   total number of matching products
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn get_paginated(
        &self,
        page: u64,
        per_page: u64,
        search: Option<&str>,
    ) -> Result<(Vec<Product>, u64), DbErr> {
        let mut query = entity::prelude::Product::find();
        if let Some(search) = search {
            query = query.filter(entity::product::Column::Name.contains(search));
        }

        let paginator = query
            .order_by_asc(entity::product::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page).await?;

        Ok((
            entities.into_iter().map(Product::from_entity).collect(),
            total,
        ))
    }

    /// Applies a partial update to a product.
    ///
    /// # Returns
    /// - `Ok(Some(Product))` - The updated product
    /// - `Ok(None)` - No product with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(
        &self,
        id: i32,
        param: UpdateProductParam,
    ) -> Result<Option<Product>, DbErr> {
        let Some(existing) = entity::prelude::Product::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active = existing.into_active_model();
        if let Some(name) = param.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(price) = param.price {
            active.price = ActiveValue::Set(price);
        }
        if let Some(details) = param.details {
            active.details = ActiveValue::Set(details);
        }

        let entity = active.update(self.db).await?;

        Ok(Some(Product::from_entity(entity)))
    }
}
