//! Product service for business logic.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::product::ProductRepository,
    error::AppError,
    model::{
        page::Page,
        product::{CreateProductParam, GetProductsParam, Product, UpdateProductParam},
    },
};

pub struct ProductService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProductService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreateProductParam) -> Result<Product, AppError> {
        let product = ProductRepository::new(self.db).create(param).await?;

        tracing::info!("Created product {} ({})", product.id, product.name);

        Ok(product)
    }

    /// Retrieves a product by ID.
    ///
    /// # Returns
    /// - `Ok(Product)` - Product found
    /// - `Err(AppError::NotFound)` - No product with that ID
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: i32) -> Result<Product, AppError> {
        ProductRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Retrieves a page of products, optionally filtered by name.
    pub async fn get_all(&self, param: GetProductsParam) -> Result<Page<Product>, AppError> {
        let (items, total) = ProductRepository::new(self.db)
            .get_paginated(param.page, param.per_page, param.search.as_deref())
            .await?;

        Ok(Page {
            items,
            total,
            page: param.page,
            per_page: param.per_page,
        })
    }

    /// Applies a partial update to a product.
    ///
    /// # Returns
    /// - `Ok(Product)` - The updated product
    /// - `Err(AppError::NotFound)` - No product with that ID
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn update(&self, id: i32, param: UpdateProductParam) -> Result<Product, AppError> {
        let product = ProductRepository::new(self.db)
            .update(id, param)
            .await?
            .ok_or_else(|| not_found(id))?;

        tracing::info!("Updated product {}", product.id);

        Ok(product)
    }
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Product {} not found", id))
}
