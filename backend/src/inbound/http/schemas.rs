//! OpenAPI schema definitions for the users resource.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. The
//! wrappers here mirror the JSON the handlers emit, including the
//! success/failure envelope around every body.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::User`].
#[derive(ToSchema)]
#[schema(as = User)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserSchema {
    /// Store-assigned identifier.
    #[schema(example = 1, minimum = 1)]
    id: i32,
    /// Username exactly as submitted.
    #[schema(example = "ada_lovelace", max_length = 255)]
    username: String,
}

/// Success envelope wrapping a single user.
#[derive(ToSchema)]
#[schema(as = UserEnvelope)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserEnvelopeSchema {
    /// Always `true`.
    #[schema(example = true)]
    success: bool,
    /// The affected user.
    payload: UserSchema,
}

/// Success envelope wrapping a list of users.
#[derive(ToSchema)]
#[schema(as = UserListEnvelope)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserListEnvelopeSchema {
    /// Always `true`.
    #[schema(example = true)]
    success: bool,
    /// Matching users ordered by id; possibly empty.
    payload: Vec<UserSchema>,
}

/// Failure envelope returned for every error.
#[derive(ToSchema)]
#[schema(as = FailureEnvelope)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct FailureEnvelopeSchema {
    /// Always `false`.
    #[schema(example = false)]
    success: bool,
    /// Human-readable failure reason.
    #[schema(example = "No user with ID 9999 was found")]
    reason: String,
}
