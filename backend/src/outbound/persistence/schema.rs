//! Diesel table definitions for the PostgreSQL schema.
//!
//! The reset hook owns the DDL for these tables; keep both in step.

diesel::table! {
    /// Users exposed by the `/users` resource.
    ///
    /// `id` is an identity column, so PostgreSQL assigns it on insert and
    /// never reissues a value until the table is rebuilt.
    users (id) {
        /// Primary key assigned by the database.
        id -> Int4,
        /// Username exactly as submitted.
        username -> Text,
    }
}
