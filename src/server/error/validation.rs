//! Field-level validation errors.

use std::collections::BTreeMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ValidationErrorDto;

/// Message recorded when a required field is absent or `null`.
pub const MISSING_FIELD: &str = "Missing data for required field.";

/// Collected validation failures keyed by field name.
///
/// Fields keep messages in insertion order and are reported in name order.
#[derive(Error, Debug, Default, Clone, PartialEq)]
#[error("Request failed validation for: {}", self.field_names().join(", "))]
pub struct ValidationErrors {
    fields: BTreeMap<String, Vec<String>>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates errors holding a single message for one field.
    pub fn single(field: &str, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.add(field, message);
        errors
    }

    /// Records a message against a field.
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.fields
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns the messages recorded for a field, if any.
    pub fn messages(&self, field: &str) -> Option<&[String]> {
        self.fields.get(field).map(Vec::as_slice)
    }

    pub fn field_names(&self) -> Vec<&str> {
        self.fields.keys().map(String::as_str).collect()
    }

    pub fn into_dto(self) -> ValidationErrorDto {
        ValidationErrorDto(self.fields)
    }
}

/// Converts validation errors into a `400 Bad Request` with a field -> messages body.
impl IntoResponse for ValidationErrors {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        (StatusCode::BAD_REQUEST, Json(self.into_dto())).into_response()
    }
}
