use finapi_accounts::{Cpf, CustomerHandle};

/// Customer context for a request.
///
/// Inserted by the customer middleware once the `cpf` header resolves to a
/// registered customer; present on every customer-scoped route.
#[derive(Debug, Clone)]
pub struct CustomerContext {
    customer: CustomerHandle,
}

impl CustomerContext {
    pub fn new(customer: CustomerHandle) -> Self {
        Self { customer }
    }

    pub fn customer(&self) -> &CustomerHandle {
        &self.customer
    }

    pub fn cpf(&self) -> &Cpf {
        self.customer.cpf()
    }
}
