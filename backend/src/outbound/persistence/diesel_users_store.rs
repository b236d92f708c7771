//! PostgreSQL-backed users store.
//!
//! Implements [`UsersStore`] for row access and [`UsersTableReset`] for the
//! seed reset. Insert and delete use `RETURNING`, so each is one atomic
//! statement and no follow-up read is needed.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::sql_query;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};
use tracing::debug;

use crate::domain::ports::{UsersStore, UsersStoreError, UsersTableReset};
use crate::domain::{User, UserId, Username, UsersFilter};

use super::models::{NewUserRow, UserRow};
use super::pool::{DbPool, PoolError};
use super::schema::users;

const DROP_USERS_SQL: &str = "DROP TABLE IF EXISTS users";
const CREATE_USERS_SQL: &str = "CREATE TABLE users (\
    id INTEGER GENERATED ALWAYS AS IDENTITY PRIMARY KEY, \
    username TEXT NOT NULL\
)";

/// Diesel-backed implementation of the users ports.
#[derive(Clone)]
pub struct DieselUsersStore {
    pool: DbPool,
}

impl DieselUsersStore {
    /// Create a new store with the given connection pool.
    pub const fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> UsersStoreError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            UsersStoreError::connection(message)
        }
    }
}

fn map_diesel_error(error: diesel::result::Error) -> UsersStoreError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        other => debug!(error = %other, "diesel operation failed"),
    }

    match error {
        DieselError::NotFound => UsersStoreError::query("record not found"),
        DieselError::QueryBuilderError(_) => UsersStoreError::query("database query error"),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            UsersStoreError::connection("database connection error")
        }
        _ => UsersStoreError::query("database error"),
    }
}

fn row_to_user(row: UserRow) -> Result<User, UsersStoreError> {
    let UserRow { id, username } = row;
    User::try_from_parts(id, username)
        .map_err(|err| UsersStoreError::query(format!("stored user {id} is invalid: {err}")))
}

fn rows_to_users(rows: Vec<UserRow>) -> Result<Vec<User>, UsersStoreError> {
    rows.into_iter().map(row_to_user).collect()
}

#[async_trait]
impl UsersStore for DieselUsersStore {
    async fn find_all(&self, filter: &UsersFilter) -> Result<Vec<User>, UsersStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<UserRow> = match filter.username() {
            Some(username) => {
                users::table
                    .filter(users::username.eq(username))
                    .order(users::id.asc())
                    .select(UserRow::as_select())
                    .load(&mut conn)
                    .await
            }
            None => {
                users::table
                    .order(users::id.asc())
                    .select(UserRow::as_select())
                    .load(&mut conn)
                    .await
            }
        }
        .map_err(map_diesel_error)?;

        rows_to_users(rows)
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UsersStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<UserRow> = users::table
            .filter(users::id.eq(id.get()))
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_user).transpose()
    }

    async fn insert(&self, username: &Username) -> Result<User, UsersStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let new_row = NewUserRow {
            username: username.as_ref(),
        };
        let row: UserRow = diesel::insert_into(users::table)
            .values(&new_row)
            .returning(UserRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        row_to_user(row)
    }

    async fn delete_by_id(&self, id: UserId) -> Result<Option<User>, UsersStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<UserRow> = diesel::delete(users::table.filter(users::id.eq(id.get())))
            .returning(UserRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_user).transpose()
    }
}

#[async_trait]
impl UsersTableReset for DieselUsersStore {
    async fn reset(&self, seed: &[Username]) -> Result<usize, UsersStoreError> {
        let rows: Vec<NewUserRow<'_>> = seed
            .iter()
            .map(|username| NewUserRow {
                username: username.as_ref(),
            })
            .collect();
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        conn.transaction(|conn| {
            async move {
                sql_query(DROP_USERS_SQL).execute(conn).await?;
                sql_query(CREATE_USERS_SQL).execute(conn).await?;

                if rows.is_empty() {
                    return Ok(0);
                }

                diesel::insert_into(users::table)
                    .values(&rows)
                    .execute(conn)
                    .await
            }
            .scope_boxed()
        })
        .await
        .map_err(map_diesel_error)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for users store error mapping.
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn pool_error_maps_to_connection_error() {
        let error = map_pool_error(PoolError::checkout("connection refused"));

        assert!(matches!(error, UsersStoreError::Connection { .. }));
        assert!(error.to_string().contains("connection refused"));
    }

    #[rstest]
    fn not_found_maps_to_query_error() {
        let error = map_diesel_error(diesel::result::Error::NotFound);

        assert!(matches!(error, UsersStoreError::Query { .. }));
        assert!(error.to_string().contains("record not found"));
    }

    #[rstest]
    fn invalid_rows_are_reported_as_query_errors() {
        let error = row_to_user(UserRow {
            id: 4,
            username: "   ".to_owned(),
        })
        .expect_err("blank username");

        assert!(matches!(error, UsersStoreError::Query { .. }));
        assert!(error.to_string().contains("stored user 4"));
    }

    #[rstest]
    fn valid_rows_convert_to_users() {
        let user = row_to_user(UserRow {
            id: 4,
            username: "ada".to_owned(),
        })
        .expect("valid row");

        assert_eq!(user.id().get(), 4);
        assert_eq!(user.username().as_ref(), "ada");
    }
}
