//! Product domain models and parameters.

use crate::{
    model::product::{CreateProductDto, ProductDto, UpdateProductDto},
    server::{
        error::validation::ValidationErrors,
        util::validate::{check_max_length, check_price, check_text, required},
    },
};

pub const NAME_MAX: usize = 255;
pub const DETAILS_MAX: usize = 300;

/// A product available for ordering.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub price: f64,
    pub details: Option<String>,
}

impl Product {
    pub fn into_dto(self) -> ProductDto {
        ProductDto {
            id: self.id,
            name: self.name,
            price: self.price,
            details: self.details,
        }
    }

    /// Converts an entity model to a product domain model at the repository boundary.
    pub fn from_entity(entity: entity::product::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            price: entity.price,
            details: entity.details,
        }
    }
}

/// Validated parameters for creating a product.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateProductParam {
    pub name: String,
    pub price: f64,
    pub details: Option<String>,
}

impl CreateProductParam {
    /// Validates a creation payload.
    ///
    /// # Returns
    /// - `Ok(CreateProductParam)` - Every field passed validation
    /// - `Err(ValidationErrors)` - One or more fields are missing or invalid
    pub fn try_from_dto(dto: CreateProductDto) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let name = required(&mut errors, "name", dto.name);
        if let Some(name) = &name {
            check_text(&mut errors, "name", name, NAME_MAX);
        }

        let price = required(&mut errors, "price", dto.price);
        if let Some(price) = price {
            check_price(&mut errors, "price", price);
        }

        if let Some(details) = &dto.details {
            check_max_length(&mut errors, "details", details, DETAILS_MAX);
        }

        match (name, price) {
            (Some(name), Some(price)) if errors.is_empty() => Ok(Self {
                name,
                price,
                details: dto.details,
            }),
            _ => Err(errors),
        }
    }
}

/// Validated parameters for a partial product update.
///
/// `None` leaves a field unchanged; `details: Some(None)` clears the details.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateProductParam {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub details: Option<Option<String>>,
}

impl UpdateProductParam {
    pub fn try_from_dto(dto: UpdateProductDto) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if dto.name.is_none() && dto.price.is_none() && dto.details.is_none() {
            errors.add("_schema", "No fields to update.");
        }
        if let Some(name) = &dto.name {
            check_text(&mut errors, "name", name, NAME_MAX);
        }
        if let Some(price) = dto.price {
            check_price(&mut errors, "price", price);
        }
        if let Some(Some(details)) = &dto.details {
            check_max_length(&mut errors, "details", details, DETAILS_MAX);
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(Self {
            name: dto.name,
            price: dto.price,
            details: dto.details,
        })
    }
}

/// Parameters for listing products.
#[derive(Debug, Clone, PartialEq)]
pub struct GetProductsParam {
    pub page: u64,
    pub per_page: u64,
    /// Optional name substring filter.
    pub search: Option<String>,
}
