use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A stored customer record.
///
/// The id is assigned by the database on first save and never reused after a
/// deletion. `document_id` is the caller-supplied business key and is unique
/// across all stored customers.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
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

/// Data required to persist a new customer. The store assigns the id and
/// both audit timestamps.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct NewCustomer {
    pub name: String,
    pub surname: String,
    pub document_id: String,
}

/// Full overwrite of the mutable customer fields. The store refreshes
/// `updated_date` as part of the save; `created_date` is never touched.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct UpdateCustomer {
    pub name: String,
    pub surname: String,
    pub document_id: String,
}
