//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the `/users` paths and the envelope schema wrappers
//! from [`crate::inbound::http::schemas`]. Swagger UI serves the document in
//! debug builds.

use crate::inbound::http::schemas::{
    FailureEnvelopeSchema, UserEnvelopeSchema, UserListEnvelopeSchema, UserSchema,
};
use crate::inbound::http::users::CreateUserRequest;
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Users resource API",
        description = "CRUD operations over the users table. Every body is a success or failure envelope."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::delete_user,
    ),
    components(schemas(
        UserSchema,
        UserEnvelopeSchema,
        UserListEnvelopeSchema,
        FailureEnvelopeSchema,
        CreateUserRequest
    )),
    tags(
        (name = "users", description = "Operations on the users table")
    )
)]
pub struct ApiDoc;
