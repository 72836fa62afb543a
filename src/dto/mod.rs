//! Wire shapes exposed by the customer API endpoints.

pub mod customer;
