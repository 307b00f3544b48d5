use serde_json::{Map, Value};
use validator::Validate;

use crate::errors::{FieldIssue, ServiceError};
use super::NewProduct;

/// JSON field order used when reporting issues.
const FIELDS: [&str; 4] = ["title", "imgUrl", "price", "description"];

/// Create payload after JSON type checks; presence rules live in the `validate` attributes.
#[derive(Debug, Default, Validate)]
pub struct CreateProductPayload {
    #[validate(required(message = "Title is required"), length(min = 1, message = "Title must not be empty"))]
    pub title: Option<String>,
    #[validate(required(message = "imgUrl is required"))]
    pub img_url: Option<String>,
    #[validate(required(message = "Price is required"))]
    pub price: Option<f64>,
    #[validate(required(message = "Description is required"))]
    pub description: Option<String>,
}

impl CreateProductPayload {
    /// Parse a request body. Every problem found is reported at once.
    pub fn parse(body: &Value) -> Result<NewProduct, ServiceError> {
        let Some(map) = body.as_object() else {
            return Err(ServiceError::invalid("body", &format!("Expected object, received {}", type_name(body))));
        };

        let mut issues = Vec::new();
        let payload = Self {
            title: string_field(map, "title", &mut issues),
            img_url: string_field(map, "imgUrl", &mut issues),
            price: number_field(map, "price", &mut issues),
            description: string_field(map, "description", &mut issues),
        };

        if let Err(errs) = payload.validate() {
            for (field, errors) in errs.field_errors() {
                let field = json_name(field.as_ref());
                // a wrong type already produced a more precise issue for this field
                if issues.iter().any(|i: &FieldIssue| i.field == field) {
                    continue;
                }
                for e in errors.iter() {
                    let message = e.message.as_ref().map(|m| m.to_string()).unwrap_or_else(|| e.code.to_string());
                    issues.push(FieldIssue::new(field, message));
                }
            }
        }

        if !issues.is_empty() {
            issues.sort_by_key(|i| FIELDS.iter().position(|f| *f == i.field).unwrap_or(FIELDS.len()));
            return Err(ServiceError::Validation(issues));
        }

        match payload {
            Self { title: Some(title), img_url: Some(img_url), price: Some(price), description: Some(description) } => {
                Ok(NewProduct { title, img_url, price, description })
            }
            _ => Err(ServiceError::invalid("body", "incomplete payload")),
        }
    }
}

/// Path parameter check for delete: the id must be a non-empty string.
pub fn parse_product_id(id: &str) -> Result<&str, ServiceError> {
    if id.is_empty() {
        return Err(ServiceError::invalid("id", "String must contain at least 1 character(s)"));
    }
    Ok(id)
}

fn json_name(field: &str) -> &str {
    match field {
        "img_url" => "imgUrl",
        other => other,
    }
}

fn type_name(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn string_field(map: &Map<String, Value>, key: &str, issues: &mut Vec<FieldIssue>) -> Option<String> {
    match map.get(key) {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(other) => {
            issues.push(FieldIssue::new(key, format!("Expected string, received {}", type_name(other))));
            None
        }
    }
}

fn number_field(map: &Map<String, Value>, key: &str, issues: &mut Vec<FieldIssue>) -> Option<f64> {
    match map.get(key) {
        None | Some(Value::Null) => None,
        Some(Value::Number(n)) => n.as_f64(),
        Some(other) => {
            issues.push(FieldIssue::new(key, format!("Expected number, received {}", type_name(other))));
            None
        }
    }
}
