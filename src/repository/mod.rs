use crate::{
    db::DbPool,
    domain::customer::{Customer, NewCustomer, UpdateCustomer},
    repository::errors::RepositoryResult,
};

pub mod customer;
pub mod errors;

#[derive(Debug, Clone, Copy)]
pub struct Pagination {
    /// Zero-based page number.
    pub page: usize,
    pub per_page: usize,
}

#[derive(Debug, Clone, Default)]
pub struct CustomerListQuery {
    pub pagination: Option<Pagination>,
}

impl CustomerListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

pub trait CustomerReader {
    fn get_customer_by_id(&self, customer_id: i32) -> RepositoryResult<Option<Customer>>;
    fn get_customer_by_document_id(&self, document_id: &str)
    -> RepositoryResult<Option<Customer>>;
    /// Returns the total number of stored customers together with the
    /// requested page, ordered by ascending id.
    fn list_customers(&self, query: CustomerListQuery) -> RepositoryResult<(usize, Vec<Customer>)>;
}

pub trait CustomerWriter {
    fn create_customer(&self, new_customer: &NewCustomer) -> RepositoryResult<Customer>;
    fn update_customer(
        &self,
        customer_id: i32,
        updates: &UpdateCustomer,
    ) -> RepositoryResult<Customer>;
    /// Removes the customer if it exists; deleting an unknown id is not an
    /// error.
    fn delete_customer(&self, customer_id: i32) -> RepositoryResult<()>;
}

/// Diesel implementation of the customer repository traits, backed by an
/// r2d2 connection pool.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub(crate) fn pool(&self) -> &DbPool {
        &self.pool
    }
}
