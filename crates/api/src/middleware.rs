use std::sync::Arc;

use axum::{
    extract::State,
    http::HeaderMap,
    middleware::Next,
    response::Response,
};

use finapi_accounts::Cpf;
use finapi_core::{DomainError, DomainResult};

use crate::app::errors;
use crate::app::services::AppServices;
use crate::context::CustomerContext;

/// Request header carrying the caller's CPF.
pub const CPF_HEADER: &str = "cpf";

/// Resolve the `cpf` header to a customer, or reject with `not_found`.
///
/// A missing, unreadable or blank header is indistinguishable from an
/// unknown CPF.
pub async fn customer_middleware(
    State(services): State<Arc<AppServices>>,
    mut req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Result<Response, Response> {
    let customer = extract_cpf(req.headers())
        .and_then(|cpf| services.directory().find_by_cpf(&cpf))
        .map_err(|e| {
            tracing::debug!(error = %e, "customer lookup failed");
            errors::domain_error_to_response(e)
        })?;

    req.extensions_mut().insert(CustomerContext::new(customer));

    Ok(next.run(req).await)
}

fn extract_cpf(headers: &HeaderMap) -> DomainResult<Cpf> {
    let header = headers.get(CPF_HEADER).ok_or(DomainError::NotFound)?;

    let header = header.to_str().map_err(|_| DomainError::NotFound)?;

    Cpf::new(header).map_err(|_| DomainError::NotFound)
}
