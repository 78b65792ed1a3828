//! Accounts module (customer directory + per-customer statement ledger).
//!
//! Pure domain logic only: no IO, no HTTP, no persistence concerns.

pub mod customer;
pub mod directory;
pub mod statement;

pub use customer::{Cpf, Customer};
pub use directory::{AccountDirectory, CustomerHandle};
pub use statement::{Amount, Operation, OperationKind, Statement};
