use axum::{
    routing::{get, post},
    Router,
};

pub mod accounts;
pub mod statement;
pub mod system;
pub mod transactions;

/// Routes that do not need an existing customer.
pub fn public_router() -> Router {
    Router::new().route("/accounts", post(accounts::create_account))
}

/// Routes scoped to the customer named by the `cpf` header.
pub fn customer_router() -> Router {
    Router::new()
        .route(
            "/account",
            get(accounts::get_account)
                .put(accounts::rename_account)
                .delete(accounts::delete_account),
        )
        .route("/statement", get(statement::get_statement))
        .route("/statement/date", get(statement::get_statement_by_date))
        .route("/balance", get(statement::get_balance))
        .route("/deposit", post(transactions::deposit))
        .route("/withdraw", post(transactions::withdraw))
}
