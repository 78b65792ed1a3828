use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock};

use chrono::{DateTime, NaiveDate, Utc};

use finapi_core::{CustomerId, DomainError, DomainResult};

use crate::customer::{Cpf, Customer};
use crate::statement::{Amount, Operation};

/// Shared handle to one customer held by the directory.
///
/// Every read or mutation goes through the customer's own lock, so a
/// withdrawal's balance check and its debit are applied as one step.
#[derive(Debug, Clone)]
pub struct CustomerHandle {
    cpf: Cpf,
    inner: Arc<Mutex<Customer>>,
}

impl CustomerHandle {
    fn new(customer: Customer) -> Self {
        Self {
            cpf: customer.cpf().clone(),
            inner: Arc::new(Mutex::new(customer)),
        }
    }

    // Customer state is plain values with no half-applied mutations, so a
    // poisoned lock still guards consistent data.
    fn lock(&self) -> MutexGuard<'_, Customer> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn cpf(&self) -> &Cpf {
        &self.cpf
    }

    pub fn id(&self) -> CustomerId {
        self.lock().id_typed()
    }

    /// Point-in-time copy of the customer, statement included.
    pub fn snapshot(&self) -> Customer {
        self.lock().clone()
    }

    pub fn rename(&self, name: impl Into<String>) {
        self.lock().rename(name);
    }

    pub fn deposit(&self, description: Option<String>, amount: Amount, at: DateTime<Utc>) {
        self.lock().deposit(description, amount, at);
    }

    pub fn withdraw(&self, amount: Amount, at: DateTime<Utc>) -> DomainResult<()> {
        self.lock().withdraw(amount, at)
    }

    pub fn statement(&self) -> Vec<Operation> {
        self.lock().statement().operations().to_vec()
    }

    pub fn statement_on(&self, date: NaiveDate) -> Vec<Operation> {
        self.lock().statement_on(date)
    }

    pub fn balance(&self) -> i128 {
        self.lock().balance()
    }

    fn same_customer(&self, other: &CustomerHandle) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

/// In-memory customer directory keyed by CPF.
///
/// Holds at most one customer per CPF. Owned by the application context and
/// shared across request handlers; nothing here is persisted.
#[derive(Debug, Default)]
pub struct AccountDirectory {
    customers: RwLock<HashMap<Cpf, CustomerHandle>>,
}

impl AccountDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open an account for `cpf`, failing if one already exists.
    pub fn create(&self, cpf: Cpf, name: impl Into<String>) -> DomainResult<CustomerId> {
        let mut customers = self
            .customers
            .write()
            .unwrap_or_else(PoisonError::into_inner);

        if customers.contains_key(&cpf) {
            return Err(DomainError::already_exists());
        }

        let customer = Customer::open(cpf.clone(), name);
        let id = customer.id_typed();
        customers.insert(cpf, CustomerHandle::new(customer));
        Ok(id)
    }

    /// Resolve the customer registered under `cpf`.
    pub fn find_by_cpf(&self, cpf: &Cpf) -> DomainResult<CustomerHandle> {
        self.customers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(cpf)
            .cloned()
            .ok_or(DomainError::NotFound)
    }

    /// Remove exactly the customer behind `customer`.
    ///
    /// Fails with `NotFound` if that customer is no longer registered, even
    /// when a newer account has since been opened under the same CPF.
    pub fn remove(&self, customer: &CustomerHandle) -> DomainResult<()> {
        let mut customers = self
            .customers
            .write()
            .unwrap_or_else(PoisonError::into_inner);

        let located = customers
            .get(customer.cpf())
            .is_some_and(|current| current.same_customer(customer));
        if !located {
            return Err(DomainError::NotFound);
        }

        customers.remove(customer.cpf());
        Ok(())
    }

    /// Snapshot of every customer, ordered by id (i.e. creation order).
    pub fn list(&self) -> Vec<Customer> {
        let handles: Vec<CustomerHandle> = self
            .customers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .cloned()
            .collect();

        let mut snapshots: Vec<Customer> = handles.iter().map(CustomerHandle::snapshot).collect();
        snapshots.sort_by_key(Customer::id_typed);
        snapshots
    }

    pub fn len(&self) -> usize {
        self.customers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
