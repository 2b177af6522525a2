use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::api::deserialize_some;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct ProductDto {
    pub id: i32,
    pub name: String,
    pub price: f64,
    pub details: Option<String>,
}

/// Product creation payload.
///
/// Required fields are optional here so that a missing field is reported as a field
/// error rather than a deserialization failure.
#[derive(Serialize, Deserialize, Debug, Clone, Default, ToSchema)]
pub struct CreateProductDto {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub details: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, ToSchema)]
pub struct UpdateProductDto {
    pub name: Option<String>,
    pub price: Option<f64>,
    /// `null` clears the details, an absent field leaves them unchanged.
    #[serde(default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<String>)]
    pub details: Option<Option<String>>,
}
