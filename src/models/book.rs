//! Book model

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use validator::Validate;

use crate::error::{AppError, AppResult};

/// Book record
///
/// Title, author and year hold whatever JSON value the client sent; only
/// their presence is checked on the way in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Book {
    /// Assigned by the store, never changes
    pub id: i64,
    #[schema(value_type = String)]
    pub title: Value,
    #[schema(value_type = String)]
    pub author: Value,
    #[schema(value_type = i64)]
    pub year: Value,
}

/// Create / update book request
///
/// Only presence of the three keys is checked: a blank title, an explicit
/// `null` or a wrong-typed year are all accepted.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct BookPayload {
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = String)]
    #[validate(required(message = "title is required"))]
    pub title: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = String)]
    #[validate(required(message = "author is required"))]
    pub author: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = i64)]
    #[validate(required(message = "year is required"))]
    pub year: Option<Value>,
}

/// A key that appears in the body is present, even when its value is `null`
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// Validated book fields, everything but the id
#[derive(Debug, Clone, PartialEq)]
pub struct BookFields {
    pub title: Value,
    pub author: Value,
    pub year: Value,
}

impl BookPayload {
    /// Check that every required key is present
    pub fn into_fields(self) -> AppResult<BookFields> {
        self.validate()
            .map_err(|e| AppError::InvalidPayload(e.to_string()))?;

        let (Some(title), Some(author), Some(year)) = (self.title, self.author, self.year) else {
            return Err(AppError::InvalidPayload("missing field".to_string()));
        };

        Ok(BookFields {
            title,
            author,
            year,
        })
    }
}

impl Book {
    pub fn new(id: i64, fields: BookFields) -> Self {
        Self {
            id,
            title: fields.title,
            author: fields.author,
            year: fields.year,
        }
    }

    /// Replace every field but the id
    pub fn apply(&mut self, fields: BookFields) {
        self.title = fields.title;
        self.author = fields.author;
        self.year = fields.year;
    }
}

/// Book list response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BookList {
    pub books: Vec<Book>,
}

/// Plain message response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
