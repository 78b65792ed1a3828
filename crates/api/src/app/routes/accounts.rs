use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use finapi_accounts::Cpf;

use crate::app::services::AppServices;
use crate::app::{dto, errors};
use crate::context::CustomerContext;

pub async fn create_account(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<dto::CreateAccountRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(v) => v,
        Err(rejection) => return errors::json_rejection_to_response(rejection),
    };

    let cpf = match Cpf::new(body.cpf) {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };

    let id = match services.directory().create(cpf.clone(), body.name) {
        Ok(id) => id,
        Err(e) => {
            tracing::info!(cpf = %cpf, error = %e, "account creation rejected");
            return errors::domain_error_to_response(e);
        }
    };

    tracing::info!(cpf = %cpf, customer_id = %id, "account created");

    (
        StatusCode::CREATED,
        Json(serde_json::json!({ "id": id.to_string() })),
    )
        .into_response()
}

pub async fn get_account(Extension(ctx): Extension<CustomerContext>) -> axum::response::Response {
    let snapshot = ctx.customer().snapshot();
    (StatusCode::OK, Json(dto::customer_to_json(&snapshot))).into_response()
}

pub async fn rename_account(
    Extension(ctx): Extension<CustomerContext>,
    body: Result<Json<dto::RenameAccountRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(v) => v,
        Err(rejection) => return errors::json_rejection_to_response(rejection),
    };

    ctx.customer().rename(body.name);
    tracing::info!(cpf = %ctx.cpf(), "account renamed");
    StatusCode::OK.into_response()
}

/// Delete the caller's account and return the remaining customers.
pub async fn delete_account(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(ctx): Extension<CustomerContext>,
) -> axum::response::Response {
    if let Err(e) = services.directory().remove(ctx.customer()) {
        return errors::domain_error_to_response(e);
    }

    tracing::info!(cpf = %ctx.cpf(), "account deleted");

    let remaining = services
        .directory()
        .list()
        .iter()
        .map(dto::customer_to_json)
        .collect::<Vec<_>>();
    (StatusCode::OK, Json(serde_json::Value::Array(remaining))).into_response()
}
