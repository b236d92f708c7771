//! Tests for the users service.

use std::sync::Arc;

use super::*;
use crate::domain::ErrorCode;
use crate::domain::ports::MockUsersStore;
use mockall::predicate::eq;
use rstest::rstest;

fn make_service(store: MockUsersStore) -> UsersService<MockUsersStore> {
    UsersService::new(Arc::new(store))
}

fn user(id: i32, username: &str) -> User {
    User::try_from_parts(id, username).expect("valid user")
}

fn user_id(id: i32) -> UserId {
    UserId::new(id).expect("valid id")
}

#[tokio::test]
async fn list_users_forwards_filter_to_store() {
    let mut store = MockUsersStore::new();
    store
        .expect_find_all()
        .withf(|filter| filter.username() == Some("ada"))
        .times(1)
        .return_once(|_| Ok(vec![user(4, "ada")]));

    let users = make_service(store)
        .list_users(&UsersFilter::by_username("ada"))
        .await
        .expect("list succeeds");

    assert_eq!(users, vec![user(4, "ada")]);
}

#[tokio::test]
async fn list_users_returns_empty_set_without_error() {
    let mut store = MockUsersStore::new();
    store.expect_find_all().return_once(|_| Ok(Vec::new()));

    let users = make_service(store)
        .list_users(&UsersFilter::by_username("nobody"))
        .await
        .expect("empty match set is a success");

    assert!(users.is_empty());
}

#[tokio::test]
async fn fetch_user_returns_found_row() {
    let mut store = MockUsersStore::new();
    store
        .expect_find_by_id()
        .with(eq(user_id(12)))
        .times(1)
        .return_once(|_| Ok(Some(user(12, "grace"))));

    let found = make_service(store)
        .fetch_user(user_id(12))
        .await
        .expect("user found");

    assert_eq!(found.username().as_ref(), "grace");
}

#[tokio::test]
async fn fetch_user_maps_absent_row_to_not_found() {
    let mut store = MockUsersStore::new();
    store.expect_find_by_id().return_once(|_| Ok(None));

    let error = make_service(store)
        .fetch_user(user_id(99))
        .await
        .expect_err("absent row");

    assert_eq!(error.code(), ErrorCode::NotFound);
    assert_eq!(error.message(), "No user with ID 99 was found");
}

#[tokio::test]
async fn create_user_returns_inserted_row() {
    let mut store = MockUsersStore::new();
    store
        .expect_insert()
        .withf(|username| username.as_ref() == "JOSH!!")
        .times(1)
        .return_once(|_| Ok(user(201, "JOSH!!")));

    let username = Username::new("JOSH!!").expect("valid username");
    let created = make_service(store)
        .create_user(username)
        .await
        .expect("insert succeeds");

    assert_eq!(created.id().get(), 201);
}

#[tokio::test]
async fn delete_user_returns_prior_state() {
    let mut store = MockUsersStore::new();
    store
        .expect_delete_by_id()
        .with(eq(user_id(3)))
        .times(1)
        .return_once(|_| Ok(Some(user(3, "linus"))));

    let deleted = make_service(store)
        .delete_user(user_id(3))
        .await
        .expect("delete succeeds");

    assert_eq!(deleted, user(3, "linus"));
}

#[tokio::test]
async fn delete_user_maps_absent_row_to_not_found() {
    let mut store = MockUsersStore::new();
    store.expect_delete_by_id().return_once(|_| Ok(None));

    let error = make_service(store)
        .delete_user(user_id(5000))
        .await
        .expect_err("absent row");

    assert_eq!(error.code(), ErrorCode::NotFound);
    assert!(error.message().contains("5000"));
}

#[rstest]
#[case(UsersStoreError::connection("pool exhausted"), ErrorCode::ServiceUnavailable)]
#[case(UsersStoreError::query("relation missing"), ErrorCode::InternalError)]
#[tokio::test]
async fn store_failures_are_surfaced(
    #[case] failure: UsersStoreError,
    #[case] expected: ErrorCode,
) {
    let mut store = MockUsersStore::new();
    store.expect_find_all().return_once(move |_| Err(failure));

    let error = make_service(store)
        .list_users(&UsersFilter::all())
        .await
        .expect_err("store failure");

    assert_eq!(error.code(), expected);
}
