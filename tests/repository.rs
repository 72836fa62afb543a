use customer_service::domain::customer::{NewCustomer, UpdateCustomer};
use customer_service::repository::errors::RepositoryError;
use customer_service::repository::{
    CustomerListQuery, CustomerReader, CustomerWriter, DieselRepository,
};

mod common;

fn new_customer(name: &str, surname: &str, document_id: &str) -> NewCustomer {
    NewCustomer {
        name: name.into(),
        surname: surname.into(),
        document_id: document_id.into(),
    }
}

#[test]
fn test_customer_repository_crud() {
    let test_db = common::TestDb::new("test_customer_repository_crud.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    let alice = repo
        .create_customer(&new_customer("Alice", "Santos", "11111111A"))
        .unwrap();
    let bob = repo
        .create_customer(&new_customer("Bob", "Diaz", "22222222B"))
        .unwrap();

    assert!(alice.id > 0);
    assert!(bob.id > alice.id);
    assert!(alice.updated_date >= alice.created_date);
    assert_eq!(alice.created_by, None);

    let found = repo.get_customer_by_id(alice.id).unwrap().unwrap();
    assert_eq!(found, alice);

    let by_document = repo
        .get_customer_by_document_id("22222222B")
        .unwrap()
        .unwrap();
    assert_eq!(by_document.id, bob.id);
    assert!(repo.get_customer_by_document_id("99999999Z").unwrap().is_none());

    let updates = UpdateCustomer {
        name: "Bobby".into(),
        surname: "Diaz".into(),
        document_id: "22222222B".into(),
    };
    let updated = repo.update_customer(bob.id, &updates).unwrap();
    assert_eq!(updated.name, "Bobby");
    assert_eq!(updated.created_date, bob.created_date);
    assert!(updated.updated_date >= bob.updated_date);

    repo.delete_customer(alice.id).unwrap();
    assert!(repo.get_customer_by_id(alice.id).unwrap().is_none());
    // Deleting an already removed id is a no-op.
    repo.delete_customer(alice.id).unwrap();

    let (total, items) = repo.list_customers(CustomerListQuery::new()).unwrap();
    assert_eq!(total, 1);
    assert_eq!(items[0].name, "Bobby");
}

#[test]
fn test_customer_repository_pagination() {
    let test_db = common::TestDb::new("test_customer_repository_pagination.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    for i in 0..25 {
        repo.create_customer(&new_customer("Name", "Surname", &format!("DOC-{i:04}")))
            .unwrap();
    }

    let (total, first_page) = repo
        .list_customers(CustomerListQuery::new().paginate(0, 20))
        .unwrap();
    assert_eq!(total, 25);
    assert_eq!(first_page.len(), 20);
    assert!(first_page.windows(2).all(|w| w[0].id < w[1].id));

    let (_, second_page) = repo
        .list_customers(CustomerListQuery::new().paginate(1, 20))
        .unwrap();
    assert_eq!(second_page.len(), 5);
    assert!(second_page[0].id > first_page[19].id);

    let (_, all) = repo.list_customers(CustomerListQuery::new()).unwrap();
    assert_eq!(all.len(), 25);

    let (_, past_the_end) = repo
        .list_customers(CustomerListQuery::new().paginate(5, 20))
        .unwrap();
    assert!(past_the_end.is_empty());
}

#[test]
fn test_duplicate_document_id_violates_unique_index() {
    let test_db = common::TestDb::new("test_duplicate_document_id.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    repo.create_customer(&new_customer("Alice", "Santos", "11111111A"))
        .unwrap();
    let result = repo.create_customer(&new_customer("Alicia", "Santos", "11111111A"));

    assert!(matches!(
        result,
        Err(RepositoryError::ConstraintViolation(_))
    ));

    let (total, _) = repo.list_customers(CustomerListQuery::new()).unwrap();
    assert_eq!(total, 1);
}

#[test]
fn test_ids_are_not_reused_after_delete() {
    let test_db = common::TestDb::new("test_ids_not_reused.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    let first = repo
        .create_customer(&new_customer("Alice", "Santos", "11111111A"))
        .unwrap();
    repo.delete_customer(first.id).unwrap();

    let second = repo
        .create_customer(&new_customer("Bob", "Diaz", "22222222B"))
        .unwrap();
    assert!(second.id > first.id);
}
