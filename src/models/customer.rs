use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::customer::{
    Customer as DomainCustomer, NewCustomer as DomainNewCustomer,
    UpdateCustomer as DomainUpdateCustomer,
};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::customers)]
/// Diesel model for [`crate::domain::customer::Customer`].
pub struct Customer {
    pub id: i32,
    pub name: String,
    pub surname: String,
    pub document_id: String,
    pub created_date: NaiveDateTime,
    pub created_by: Option<String>,
    pub updated_date: NaiveDateTime,
    pub updated_by: Option<String>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::customers)]
/// Insertable form of [`Customer`]. The database assigns the id and both
/// audit timestamps.
pub struct NewCustomer<'a> {
    pub name: &'a str,
    pub surname: &'a str,
    pub document_id: &'a str,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::customers)]
/// Data used when updating a [`Customer`] record. `updated_date` is set by
/// the repository at save time.
pub struct UpdateCustomer<'a> {
    pub name: &'a str,
    pub surname: &'a str,
    pub document_id: &'a str,
    pub updated_date: NaiveDateTime,
}

impl From<Customer> for DomainCustomer {
    fn from(customer: Customer) -> Self {
        Self {
            id: customer.id,
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

impl<'a> From<&'a DomainNewCustomer> for NewCustomer<'a> {
    fn from(customer: &'a DomainNewCustomer) -> Self {
        Self {
            name: customer.name.as_str(),
            surname: customer.surname.as_str(),
            document_id: customer.document_id.as_str(),
        }
    }
}

impl<'a> UpdateCustomer<'a> {
    /// Build the changeset for the given updates, refreshing `updated_date`
    /// to the provided save timestamp.
    pub fn new(updates: &'a DomainUpdateCustomer, updated_date: NaiveDateTime) -> Self {
        Self {
            name: updates.name.as_str(),
            surname: updates.surname.as_str(),
            document_id: updates.document_id.as_str(),
            updated_date,
        }
    }
}
