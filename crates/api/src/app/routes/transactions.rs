use axum::{
    extract::{rejection::JsonRejection, Extension},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;

use crate::app::{dto, errors};
use crate::context::CustomerContext;

pub async fn deposit(
    Extension(ctx): Extension<CustomerContext>,
    body: Result<Json<dto::DepositRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(v) => v,
        Err(rejection) => return errors::json_rejection_to_response(rejection),
    };

    let amount = match dto::parse_amount(body.amount) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    ctx.customer().deposit(body.description, amount, Utc::now());

    tracing::info!(cpf = %ctx.cpf(), amount = amount.value(), "deposit recorded");
    StatusCode::CREATED.into_response()
}

pub async fn withdraw(
    Extension(ctx): Extension<CustomerContext>,
    body: Result<Json<dto::WithdrawRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(v) => v,
        Err(rejection) => return errors::json_rejection_to_response(rejection),
    };

    let amount = match dto::parse_amount(body.amount) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    if let Err(e) = ctx.customer().withdraw(amount, Utc::now()) {
        tracing::warn!(cpf = %ctx.cpf(), amount = amount.value(), error = %e, "withdrawal rejected");
        return errors::domain_error_to_response(e);
    }

    tracing::info!(cpf = %ctx.cpf(), amount = amount.value(), "withdrawal recorded");
    StatusCode::CREATED.into_response()
}
