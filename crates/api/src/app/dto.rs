use axum::http::StatusCode;
use chrono::NaiveDate;
use serde::Deserialize;

use finapi_accounts::{Amount, Customer, Operation};
use finapi_core::Entity;

use crate::app::errors;

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct CreateAccountRequest {
    pub cpf: String,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct RenameAccountRequest {
    pub name: String,
}

/// Amounts are whole minor units; fractional or non-numeric values fail
/// extraction and are answered with 400 `validation_error`.
#[derive(Debug, Deserialize)]
pub struct DepositRequest {
    pub description: Option<String>,
    pub amount: i64,
}

#[derive(Debug, Deserialize)]
pub struct WithdrawRequest {
    pub amount: i64,
}

#[derive(Debug, Deserialize)]
pub struct StatementDateQuery {
    pub date: String, // YYYY-MM-DD
}

// -------------------------
// JSON mapping helpers
// -------------------------

pub fn operation_to_json(op: &Operation) -> serde_json::Value {
    let mut value = serde_json::json!({
        "type": op.kind.as_str(),
        "amount": op.amount.value(),
        "created_at": op.created_at.to_rfc3339(),
    });
    if let Some(description) = &op.description {
        value["description"] = serde_json::Value::String(description.clone());
    }
    value
}

pub fn operations_to_json(ops: &[Operation]) -> serde_json::Value {
    serde_json::Value::Array(ops.iter().map(operation_to_json).collect())
}

pub fn customer_to_json(customer: &Customer) -> serde_json::Value {
    serde_json::json!({
        "id": customer.id().to_string(),
        "cpf": customer.cpf().as_str(),
        "name": customer.name(),
        "statement": operations_to_json(customer.statement().operations()),
    })
}

// -------------------------
// Input parsing helpers
// -------------------------

pub fn parse_amount(raw: i64) -> Result<Amount, axum::response::Response> {
    Amount::new(raw).map_err(errors::domain_error_to_response)
}

pub fn parse_date(raw: &str) -> Result<NaiveDate, axum::response::Response> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| {
        errors::json_error(
            StatusCode::BAD_REQUEST,
            "invalid_date",
            "date must be formatted as YYYY-MM-DD",
        )
    })
}
