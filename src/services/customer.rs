//! The five customer use-cases. Each function is generic over the
//! repository traits so it can be exercised against an in-memory store.

use crate::domain::customer::{NewCustomer, UpdateCustomer};
use crate::dto::customer::{CustomerResponse, CustomersPaginatedList, SaveCustomerRequest};
use crate::repository::errors::RepositoryError;
use crate::repository::{CustomerListQuery, CustomerReader, CustomerWriter};
use crate::services::{ServiceError, ServiceResult};

/// Zero-based page used when the caller supplies none.
pub const DEFAULT_PAGE: usize = 0;
/// Page size used when the caller supplies none.
pub const DEFAULT_ELEMENTS_PER_PAGE: usize = 20;

/// Checks the save request fields in a fixed order and reports the first
/// missing one. Values are taken as-is, without trimming.
fn validate_save_request(request: &SaveCustomerRequest) -> ServiceResult<()> {
    if request.name.is_empty() {
        return Err(ServiceError::Validation(
            "The customer name is mandatory.".to_string(),
        ));
    }
    if request.surname.is_empty() {
        return Err(ServiceError::Validation(
            "The customer surname is mandatory.".to_string(),
        ));
    }
    if request.document_id.is_empty() {
        return Err(ServiceError::Validation(
            "The customer documentId is mandatory.".to_string(),
        ));
    }
    Ok(())
}

fn not_found() -> ServiceError {
    ServiceError::NotFound("Customer not found.".to_string())
}

fn document_id_conflict(document_id: &str) -> ServiceError {
    ServiceError::Conflict(format!(
        "Customer with documentId: {document_id} already exists in the system."
    ))
}

/// Validates the request, enforces documentId uniqueness and persists a new
/// customer.
///
/// The lookup-then-insert check is racy on its own; the unique index on
/// `document_id` is the authoritative backstop, and its violation surfaces
/// as the same conflict error.
pub fn create_customer<R>(repo: &R, request: &SaveCustomerRequest) -> ServiceResult<CustomerResponse>
where
    R: CustomerReader + CustomerWriter + ?Sized,
{
    validate_save_request(request)?;

    if repo
        .get_customer_by_document_id(&request.document_id)?
        .is_some()
    {
        return Err(document_id_conflict(&request.document_id));
    }

    let new_customer = NewCustomer::from(request);
    let created = repo
        .create_customer(&new_customer)
        .map_err(|err| match err {
            RepositoryError::ConstraintViolation(_) => document_id_conflict(&request.document_id),
            other => other.into(),
        })?;

    Ok(created.into())
}

/// Fetches a customer by its identifier.
pub fn get_customer_detail<R>(repo: &R, customer_id: i32) -> ServiceResult<CustomerResponse>
where
    R: CustomerReader + ?Sized,
{
    match repo.get_customer_by_id(customer_id)? {
        Some(customer) => Ok(customer.into()),
        None => Err(not_found()),
    }
}

/// Overwrites the mutable fields of an existing customer.
///
/// The existence check deliberately precedes validation: a missing customer
/// is reported even when the request body is also invalid.
pub fn update_customer<R>(
    repo: &R,
    customer_id: i32,
    request: &SaveCustomerRequest,
) -> ServiceResult<CustomerResponse>
where
    R: CustomerReader + CustomerWriter + ?Sized,
{
    if repo.get_customer_by_id(customer_id)?.is_none() {
        return Err(not_found());
    }

    validate_save_request(request)?;

    let updates = UpdateCustomer::from(request);
    let updated = repo
        .update_customer(customer_id, &updates)
        .map_err(|err| match err {
            RepositoryError::NotFound => not_found(),
            RepositoryError::ConstraintViolation(_) => document_id_conflict(&request.document_id),
            other => other.into(),
        })?;

    Ok(updated.into())
}

/// Deletes a customer if it exists. Idempotent: an unknown id is a no-op,
/// not an error.
pub fn delete_customer<R>(repo: &R, customer_id: i32) -> ServiceResult<()>
where
    R: CustomerReader + CustomerWriter + ?Sized,
{
    if repo.get_customer_by_id(customer_id)?.is_some() {
        repo.delete_customer(customer_id)?;
    }
    Ok(())
}

/// Returns one page of customers with pagination totals.
///
/// Missing parameters fall back to the defaults; supplied values are used
/// as-is. `total_pages` is floored at 1 so an empty store still reports one
/// (empty) page.
pub fn list_customers<R>(
    repo: &R,
    page: Option<usize>,
    elements_per_page: Option<usize>,
) -> ServiceResult<CustomersPaginatedList>
where
    R: CustomerReader + ?Sized,
{
    let page = page.unwrap_or(DEFAULT_PAGE);
    let per_page = elements_per_page.unwrap_or(DEFAULT_ELEMENTS_PER_PAGE);

    let (total, customers) = repo.list_customers(CustomerListQuery::new().paginate(page, per_page))?;

    let total_pages = total.div_ceil(per_page.max(1)).max(1);

    Ok(CustomersPaginatedList {
        page_number: page,
        total_size: total,
        total_pages,
        customers: customers.into_iter().map(Into::into).collect(),
    })
}
