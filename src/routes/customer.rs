use actix_web::{HttpResponse, delete, get, post, put, web};

use crate::dto::customer::{ListCustomersQuery, SaveCustomerRequest};
use crate::repository::DieselRepository;
use crate::services::ServiceError;
use crate::services::customer as customer_service;

/// Creates a new customer.
#[post("/customers")]
pub async fn create_customer(
    request: web::Json<SaveCustomerRequest>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    let customer = customer_service::create_customer(repo.get_ref(), &request)?;
    Ok(HttpResponse::Created().json(customer))
}

/// Returns one page of customers with pagination totals.
#[get("/customers")]
pub async fn list_customers(
    params: web::Query<ListCustomersQuery>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    let customers =
        customer_service::list_customers(repo.get_ref(), params.page, params.elements_per_page)?;
    Ok(HttpResponse::Ok().json(customers))
}

/// Returns all the information of a customer given its id.
#[get("/customers/{customer_id}")]
pub async fn get_customer_detail(
    customer_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    let customer =
        customer_service::get_customer_detail(repo.get_ref(), customer_id.into_inner())?;
    Ok(HttpResponse::Ok().json(customer))
}

/// Updates an existing customer.
#[put("/customers/{customer_id}")]
pub async fn update_customer(
    customer_id: web::Path<i32>,
    request: web::Json<SaveCustomerRequest>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    let customer =
        customer_service::update_customer(repo.get_ref(), customer_id.into_inner(), &request)?;
    Ok(HttpResponse::Ok().json(customer))
}

/// Deletes a customer given its id. Idempotent: an unknown id still answers
/// 204.
#[delete("/customers/{customer_id}")]
pub async fn delete_customer(
    customer_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    customer_service::delete_customer(repo.get_ref(), customer_id.into_inner())?;
    Ok(HttpResponse::NoContent().finish())
}
