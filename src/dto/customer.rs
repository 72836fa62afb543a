//! JSON-facing shapes and the explicit field-copy conversions between them
//! and the domain layer.

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::customer::{Customer, NewCustomer, UpdateCustomer};

/// Treats an explicit JSON `null` like a missing field.
fn null_to_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Body accepted by the create and update endpoints.
///
/// Absent or null fields deserialize to empty strings so that the validation
/// rules, not the JSON decoder, own the error message.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SaveCustomerRequest {
    #[serde(deserialize_with = "null_to_empty")]
    pub name: String,
    #[serde(deserialize_with = "null_to_empty")]
    pub surname: String,
    #[serde(deserialize_with = "null_to_empty")]
    pub document_id: String,
}

/// Query parameters accepted by the list endpoint.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListCustomersQuery {
    /// Zero-based page number, defaults to 0.
    pub page: Option<usize>,
    /// Page size, defaults to 20.
    pub elements_per_page: Option<usize>,
}

/// Projection of a stored customer returned to callers. The stored id is
/// exposed as `customerId`.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CustomerResponse {
    pub customer_id: i32,
    pub name: String,
    pub surname: String,
    pub document_id: String,
    pub created_date: NaiveDateTime,
    pub created_by: Option<String>,
    pub updated_date: NaiveDateTime,
    pub updated_by: Option<String>,
}

/// One page of customers together with the pagination totals.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CustomersPaginatedList {
    /// Zero-based page number echoed from the request.
    pub page_number: usize,
    /// Count of all stored customers, ignoring pagination.
    pub total_size: usize,
    /// Total pages for the requested page size, never below 1.
    pub total_pages: usize,
    /// The requested page, empty when nothing is stored.
    pub customers: Vec<CustomerResponse>,
}

impl From<&SaveCustomerRequest> for NewCustomer {
    fn from(request: &SaveCustomerRequest) -> Self {
        Self {
            name: request.name.clone(),
            surname: request.surname.clone(),
            document_id: request.document_id.clone(),
        }
    }
}

impl From<&SaveCustomerRequest> for UpdateCustomer {
    fn from(request: &SaveCustomerRequest) -> Self {
        Self {
            name: request.name.clone(),
            surname: request.surname.clone(),
            document_id: request.document_id.clone(),
        }
    }
}

impl From<Customer> for CustomerResponse {
    fn from(customer: Customer) -> Self {
        Self {
            customer_id: customer.id,
            name: customer.name,
            surname: customer.surname,
            document_id: customer.document_id,
            created_date: customer.created_date,
            created_by: customer.created_by,
            updated_date: customer.updated_date,
            updated_by: customer.updated_by,
        }
    }
}
