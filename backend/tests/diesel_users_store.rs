//! Integration tests for `DieselUsersStore` against a real PostgreSQL database.
//!
//! The suite runs only when `USERS_TEST_DATABASE_URL` is set. All checks run
//! in one test so table rebuilds never race with each other.

use std::collections::HashSet;
use std::sync::Arc;

use users_backend::domain::ports::{UsersStore, UsersTableReset};
use users_backend::domain::{UserId, Username, UsersFilter, UsersTableResetService};
use users_backend::outbound::persistence::{DbPool, DieselUsersStore, PoolConfig};
use users_seed::SeedDefinition;

mod support;

use support::test_database_url;

fn username(raw: &str) -> Username {
    Username::new(raw).expect("valid username")
}

#[tokio::test]
async fn diesel_store_honours_port_contract() {
    let Some(database_url) = test_database_url("diesel_users_store") else {
        return;
    };
    let pool = DbPool::new(PoolConfig::new(database_url).with_max_size(2))
        .await
        .expect("pool builds");
    let store = Arc::new(DieselUsersStore::new(pool));
    let reset = UsersTableResetService::from_definition(
        store.clone(),
        &SeedDefinition::new(11, 20),
    )
    .expect("seed generates");

    // Reset installs the seed with ids 1..=n and is idempotent.
    assert_eq!(reset.reset_users_table().await.expect("first reset"), 20);
    let first = store.find_all(&UsersFilter::all()).await.expect("list");
    assert_eq!(reset.reset_users_table().await.expect("second reset"), 20);
    let second = store.find_all(&UsersFilter::all()).await.expect("list");
    assert_eq!(first, second);
    let ids: Vec<i32> = first.iter().map(|user| user.id().get()).collect();
    assert_eq!(ids, (1..=20).collect::<Vec<_>>());

    // Every seeded username filters to exactly one row.
    for seeded in reset.seed() {
        let matches = store
            .find_all(&UsersFilter::by_username(seeded.as_ref()))
            .await
            .expect("filter");
        assert_eq!(matches.len(), 1, "username {seeded} should be unique");
    }
    let none = store
        .find_all(&UsersFilter::by_username("no-such-user"))
        .await
        .expect("filter");
    assert!(none.is_empty());

    // Insert assigns fresh ids; delete returns prior state; ids are not reused.
    let created = store.insert(&username("JOSH!!")).await.expect("insert");
    assert_eq!(created.id().get(), 21);
    assert_eq!(created.username().as_ref(), "JOSH!!");

    let found = store
        .find_by_id(created.id())
        .await
        .expect("find")
        .expect("row exists");
    assert_eq!(found, created);

    let deleted = store
        .delete_by_id(created.id())
        .await
        .expect("delete")
        .expect("row existed");
    assert_eq!(deleted, created);
    assert!(store.find_by_id(created.id()).await.expect("find").is_none());
    assert!(store.delete_by_id(created.id()).await.expect("delete").is_none());

    let next = store.insert(&username("after-delete")).await.expect("insert");
    let seen: HashSet<i32> = first.iter().map(|user| user.id().get()).collect();
    assert!(next.id().get() > created.id().get());
    assert!(!seen.contains(&next.id().get()));

    // Absent ids read as none.
    let missing = UserId::new(i32::MAX).expect("valid id");
    assert!(store.find_by_id(missing).await.expect("find").is_none());

    // Empty seed leaves an empty, usable table.
    assert_eq!(store.reset(&[]).await.expect("empty reset"), 0);
    assert!(store.find_all(&UsersFilter::all()).await.expect("list").is_empty());
    let fresh = store.insert(&username("first")).await.expect("insert");
    assert_eq!(fresh.id().get(), 1);

    reset.reset_users_table().await.expect("restore seed");
}
