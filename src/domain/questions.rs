//! Question domain types
//!
//! POST /questions carries two different requests on one path. The body is
//! classified once into [`QuestionPayload`] and the handler only ever sees
//! the typed variant.

use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Question entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Question {
    pub id: i32,
    pub question: String,
    pub answer: String,
    pub category: i32,
    pub difficulty: i32,
}

/// Request DTO for creating a question
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    #[serde(deserialize_with = "int_or_numeric_string")]
    pub category: i32,
    #[serde(deserialize_with = "int_or_numeric_string")]
    pub difficulty: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionPayload {
    Search { search_term: String },
    Create(NewQuestion),
}

/// Why a POST /questions body could not be classified
#[derive(Debug, thiserror::Error)]
pub enum PayloadError {
    #[error("request body must be a JSON object")]
    NotAnObject,

    #[error("searchTerm must be a string")]
    SearchTermNotString,

    #[error("invalid question: {0}")]
    InvalidQuestion(#[from] serde_json::Error),
}

impl QuestionPayload {
    /// A non-empty `searchTerm` selects search; absent, null or empty falls
    /// through to create, which then needs every question field.
    pub fn from_body(body: Value) -> Result<Self, PayloadError> {
        let Value::Object(fields) = &body else {
            return Err(PayloadError::NotAnObject);
        };

        match fields.get("searchTerm") {
            Some(Value::String(term)) if !term.is_empty() => {
                return Ok(Self::Search {
                    search_term: term.clone(),
                })
            }
            None | Some(Value::Null) | Some(Value::String(_)) => {}
            Some(_) => return Err(PayloadError::SearchTermNotString),
        }

        Ok(Self::Create(serde_json::from_value(body)?))
    }
}

pub(crate) fn int_or_numeric_string<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum IntOrString {
        Int(i32),
        Str(String),
    }

    match IntOrString::deserialize(deserializer)? {
        IntOrString::Int(n) => Ok(n),
        IntOrString::Str(s) => s
            .trim()
            .parse()
            .map_err(|_| de::Error::custom(format!("expected an integer, got {s:?}"))),
    }
}
