use axum::{
    extract::{rejection::QueryRejection, Extension, Query},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::app::{dto, errors};
use crate::context::CustomerContext;

pub async fn get_statement(Extension(ctx): Extension<CustomerContext>) -> axum::response::Response {
    let ops = ctx.customer().statement();
    (StatusCode::OK, Json(dto::operations_to_json(&ops))).into_response()
}

/// Operations recorded on one UTC calendar day (`?date=YYYY-MM-DD`).
pub async fn get_statement_by_date(
    Extension(ctx): Extension<CustomerContext>,
    query: Result<Query<dto::StatementDateQuery>, QueryRejection>,
) -> axum::response::Response {
    let Query(query) = match query {
        Ok(v) => v,
        Err(rejection) => return errors::query_rejection_to_response(rejection),
    };

    let date = match dto::parse_date(&query.date) {
        Ok(d) => d,
        Err(resp) => return resp,
    };

    let ops = ctx.customer().statement_on(date);
    (StatusCode::OK, Json(dto::operations_to_json(&ops))).into_response()
}

pub async fn get_balance(Extension(ctx): Extension<CustomerContext>) -> axum::response::Response {
    (StatusCode::OK, Json(ctx.customer().balance())).into_response()
}
