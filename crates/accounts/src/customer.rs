use chrono::{DateTime, NaiveDate, Utc};

use finapi_core::{CustomerId, DomainError, DomainResult, Entity, ValueObject};

use crate::statement::{Amount, Operation, Statement};

/// Customer lookup key (modeled on the Brazilian CPF number).
///
/// Only blankness is checked; surrounding whitespace is stripped.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cpf(String);

impl Cpf {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("cpf must not be empty"));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for Cpf {}

impl core::fmt::Display for Cpf {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A customer account: identity, display name and statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    id: CustomerId,
    cpf: Cpf,
    name: String,
    statement: Statement,
}

impl Customer {
    /// New account with an empty statement and a freshly generated id.
    pub fn open(cpf: Cpf, name: impl Into<String>) -> Self {
        Self {
            id: CustomerId::new(),
            cpf,
            name: name.into(),
            statement: Statement::new(),
        }
    }

    pub fn id_typed(&self) -> CustomerId {
        self.id
    }

    pub fn cpf(&self) -> &Cpf {
        &self.cpf
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn statement(&self) -> &Statement {
        &self.statement
    }

    pub fn statement_on(&self, date: NaiveDate) -> Vec<Operation> {
        self.statement.on_date(date)
    }

    pub fn balance(&self) -> i128 {
        self.statement.balance()
    }

    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Record a credit. Always succeeds.
    pub fn deposit(&mut self, description: Option<String>, amount: Amount, at: DateTime<Utc>) {
        self.statement
            .append(Operation::credit(amount, description, at));
    }

    /// Record a debit, refusing to take the balance below the requested amount.
    ///
    /// On failure the statement is left untouched.
    pub fn withdraw(&mut self, amount: Amount, at: DateTime<Utc>) -> DomainResult<()> {
        let balance = self.balance();
        if balance < i128::from(amount.value()) {
            return Err(DomainError::InsufficientFunds {
                balance,
                requested: amount.value(),
            });
        }

        self.statement.append(Operation::debit(amount, at));
        Ok(())
    }
}

impl Entity for Customer {
    type Id = CustomerId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
