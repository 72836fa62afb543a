use chrono::Utc;
use diesel::prelude::*;

use crate::{
    domain::customer::{Customer, NewCustomer, UpdateCustomer},
    repository::{CustomerListQuery, CustomerReader, CustomerWriter, DieselRepository},
    repository::errors::RepositoryResult,
};

impl CustomerReader for DieselRepository {
    fn get_customer_by_id(&self, customer_id: i32) -> RepositoryResult<Option<Customer>> {
        use crate::models::customer::Customer as DbCustomer;
        use crate::schema::customers;

        let mut conn = self.pool().get()?;
        let customer = customers::table
            .find(customer_id)
            .first::<DbCustomer>(&mut conn)
            .optional()?;

        Ok(customer.map(Into::into))
    }

    fn get_customer_by_document_id(
        &self,
        document_id: &str,
    ) -> RepositoryResult<Option<Customer>> {
        use crate::models::customer::Customer as DbCustomer;
        use crate::schema::customers;

        let mut conn = self.pool().get()?;
        let customer = customers::table
            .filter(customers::document_id.eq(document_id))
            .first::<DbCustomer>(&mut conn)
            .optional()?;

        Ok(customer.map(Into::into))
    }

    fn list_customers(&self, query: CustomerListQuery) -> RepositoryResult<(usize, Vec<Customer>)> {
        use crate::models::customer::Customer as DbCustomer;
        use crate::schema::customers;

        let mut conn = self.pool().get()?;

        let total: i64 = customers::table.count().get_result(&mut conn)?;

        let mut items_query = customers::table
            .order(customers::id.asc())
            .into_boxed();

        if let Some(pagination) = query.pagination {
            items_query = items_query
                .limit(pagination.per_page as i64)
                .offset((pagination.page * pagination.per_page) as i64);
        }

        let items = items_query
            .load::<DbCustomer>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect::<Vec<Customer>>();

        Ok((total as usize, items))
    }
}

impl CustomerWriter for DieselRepository {
    fn create_customer(&self, new_customer: &NewCustomer) -> RepositoryResult<Customer> {
        use crate::models::customer::{Customer as DbCustomer, NewCustomer as DbNewCustomer};
        use crate::schema::customers;

        let mut conn = self.pool().get()?;
        let insertable: DbNewCustomer = new_customer.into();

        // The database assigns the id and both audit timestamps.
        let created = diesel::insert_into(customers::table)
            .values(&insertable)
            .get_result::<DbCustomer>(&mut conn)?;

        Ok(created.into())
    }

    fn update_customer(
        &self,
        customer_id: i32,
        updates: &UpdateCustomer,
    ) -> RepositoryResult<Customer> {
        use crate::models::customer::{Customer as DbCustomer, UpdateCustomer as DbUpdateCustomer};
        use crate::schema::customers;

        let mut conn = self.pool().get()?;
        let changes = DbUpdateCustomer::new(updates, Utc::now().naive_utc());

        let updated = diesel::update(customers::table.find(customer_id))
            .set(&changes)
            .get_result::<DbCustomer>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_customer(&self, customer_id: i32) -> RepositoryResult<()> {
        use crate::schema::customers;

        let mut conn = self.pool().get()?;
        diesel::delete(customers::table.find(customer_id)).execute(&mut conn)?;
        Ok(())
    }
}
