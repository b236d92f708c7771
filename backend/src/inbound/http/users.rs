//! Users API handlers.
//!
//! ```text
//! GET    /users
//! GET    /users?username=ada
//! GET    /users/{id}
//! POST   /users {"username":"ada"}
//! DELETE /users/{id}
//! ```

use actix_web::http::{StatusCode, header};
use actix_web::{HttpResponse, delete, get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{Error, UserId, UserValidationError, Username, UsersFilter, user_not_found};
use crate::inbound::http::ApiResult;
use crate::inbound::http::envelope::success;
use crate::inbound::http::error::{json_error_handler, query_error_handler};
use crate::inbound::http::schemas::{
    FailureEnvelopeSchema, UserEnvelopeSchema, UserListEnvelopeSchema,
};
use crate::inbound::http::state::HttpState;

/// Query string accepted by `GET /users`.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListUsersQuery {
    /// Return only users whose username matches exactly.
    pub username: Option<String>,
}

/// Request body for `POST /users`.
///
/// Example JSON: `{"username":"ada"}`
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CreateUserRequest {
    /// Username to store; must be a non-blank string.
    #[schema(example = "ada_lovelace")]
    pub username: Option<String>,
}

fn parse_user_id(raw: &str) -> Result<UserId, Error> {
    UserId::parse(raw).map_err(|err| match err {
        UserValidationError::IdOutOfRange { raw } => user_not_found(raw),
        other => Error::invalid_request(other.to_string()),
    })
}

fn parse_username(request: CreateUserRequest) -> Result<Username, Error> {
    let raw = request
        .username
        .ok_or_else(|| Error::invalid_request("username is required"))?;
    Username::new(raw).map_err(|err| Error::invalid_request(err.to_string()))
}

/// List users, optionally filtered by exact username.
#[utoipa::path(
    get,
    path = "/users",
    params(ListUsersQuery),
    responses(
        (status = 200, description = "Matching users ordered by id", body = UserListEnvelopeSchema),
        (status = 400, description = "Invalid query string", body = FailureEnvelopeSchema),
        (status = 500, description = "Internal server error", body = FailureEnvelopeSchema),
        (status = 503, description = "Users store unavailable", body = FailureEnvelopeSchema)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(
    state: web::Data<HttpState>,
    query: web::Query<ListUsersQuery>,
) -> ApiResult<HttpResponse> {
    let filter = query
        .into_inner()
        .username
        .map_or_else(UsersFilter::all, UsersFilter::by_username);
    let users = state.users_query.list_users(&filter).await?;
    Ok(success(StatusCode::OK, users))
}

/// Fetch a single user by id.
#[utoipa::path(
    get,
    path = "/users/{id}",
    params(("id" = String, Path, description = "Positive integer user id")),
    responses(
        (status = 200, description = "User found", body = UserEnvelopeSchema),
        (status = 400, description = "Malformed id", body = FailureEnvelopeSchema),
        (status = 404, description = "No such user", body = FailureEnvelopeSchema),
        (status = 500, description = "Internal server error", body = FailureEnvelopeSchema),
        (status = 503, description = "Users store unavailable", body = FailureEnvelopeSchema)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/users/{id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_user_id(&path)?;
    let user = state.users_query.fetch_user(id).await?;
    Ok(success(StatusCode::OK, user))
}

/// Create a user; the store assigns the id.
#[utoipa::path(
    post,
    path = "/users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = UserEnvelopeSchema,
            headers(("Location" = String, description = "Path of the new user"))),
        (status = 400, description = "Invalid request body", body = FailureEnvelopeSchema),
        (status = 500, description = "Internal server error", body = FailureEnvelopeSchema),
        (status = 503, description = "Users store unavailable", body = FailureEnvelopeSchema)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<CreateUserRequest>,
) -> ApiResult<HttpResponse> {
    let username = parse_username(payload.into_inner())?;
    let user = state.users_command.create_user(username).await?;
    let mut response = success(StatusCode::CREATED, &user);
    if let Ok(location) = header::HeaderValue::from_str(&format!("/users/{}", user.id())) {
        response.headers_mut().insert(header::LOCATION, location);
    }
    Ok(response)
}

/// Delete a user, returning the removed row.
#[utoipa::path(
    delete,
    path = "/users/{id}",
    params(("id" = String, Path, description = "Positive integer user id")),
    responses(
        (status = 200, description = "User deleted", body = UserEnvelopeSchema),
        (status = 400, description = "Malformed id", body = FailureEnvelopeSchema),
        (status = 404, description = "No such user", body = FailureEnvelopeSchema),
        (status = 500, description = "Internal server error", body = FailureEnvelopeSchema),
        (status = 503, description = "Users store unavailable", body = FailureEnvelopeSchema)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[delete("/users/{id}")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_user_id(&path)?;
    let user = state.users_command.delete_user(id).await?;
    Ok(success(StatusCode::OK, user))
}

/// Register the users routes and the extractor configuration they rely on.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use users_backend::inbound::http::users::configure;
///
/// let app = App::new().configure(configure);
/// # let _ = app;
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .service(list_users)
        .service(create_user)
        .service(get_user)
        .service(delete_user);
}
