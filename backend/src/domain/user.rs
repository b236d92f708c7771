//! User data model.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Maximum number of characters accepted for a username.
pub const USERNAME_MAX: usize = 255;

/// Validation errors raised while building user primitives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    /// The identifier text was empty or contained non-digit characters.
    InvalidId { raw: String },
    /// The identifier parsed to zero or a negative number.
    NonPositiveId { raw: String },
    /// The identifier is a digit string too large for the id column.
    IdOutOfRange { raw: String },
    /// The username was missing, empty, or whitespace only.
    EmptyUsername,
    /// The username exceeded [`USERNAME_MAX`] characters.
    UsernameTooLong { max: usize },
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidId { raw } | Self::NonPositiveId { raw } => {
                write!(f, "User ID must be a positive integer, got '{raw}'")
            }
            Self::IdOutOfRange { raw } => {
                write!(f, "User ID '{raw}' is outside the supported range")
            }
            Self::EmptyUsername => write!(f, "username must not be empty"),
            Self::UsernameTooLong { max } => {
                write!(f, "username must be at most {max} characters")
            }
        }
    }
}

impl std::error::Error for UserValidationError {}

/// Store-assigned user identifier.
///
/// ## Invariants
/// - The wrapped value is strictly positive.
///
/// # Examples
/// ```
/// use users_backend::domain::UserId;
///
/// let id = UserId::parse("42").expect("valid id");
/// assert_eq!(id.get(), 42);
/// assert!(UserId::parse("abc").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UserId(i32);

impl UserId {
    /// Validate and construct a [`UserId`] from a numeric value.
    pub fn new(id: i32) -> Result<Self, UserValidationError> {
        if id <= 0 {
            return Err(UserValidationError::NonPositiveId {
                raw: id.to_string(),
            });
        }
        Ok(Self(id))
    }

    /// Parse a path segment into a [`UserId`].
    ///
    /// Only canonical ASCII digit strings are accepted. Signs, whitespace,
    /// decimal points, and leading zeros are rejected, so the text always
    /// matches the id's [`Display`](fmt::Display) form.
    pub fn parse(raw: &str) -> Result<Self, UserValidationError> {
        if raw.is_empty() || !raw.bytes().all(|byte| byte.is_ascii_digit()) {
            return Err(UserValidationError::InvalidId {
                raw: raw.to_owned(),
            });
        }
        let significant = raw.trim_start_matches('0');
        if significant.is_empty() {
            return Err(UserValidationError::NonPositiveId {
                raw: raw.to_owned(),
            });
        }
        if significant.len() != raw.len() {
            return Err(UserValidationError::InvalidId {
                raw: raw.to_owned(),
            });
        }
        let value: i32 = raw
            .parse()
            .map_err(|_| UserValidationError::IdOutOfRange {
                raw: raw.to_owned(),
            })?;
        Ok(Self(value))
    }

    /// Access the underlying integer.
    #[must_use]
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i32> for UserId {
    type Error = UserValidationError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<UserId> for i32 {
    fn from(value: UserId) -> Self {
        value.0
    }
}

/// Username as submitted by the client.
///
/// The stored value is kept exactly as provided; only the blank check
/// trims whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Username(String);

impl Username {
    /// Validate and construct a [`Username`] from owned input.
    pub fn new(username: impl Into<String>) -> Result<Self, UserValidationError> {
        Self::from_owned(username.into())
    }

    fn from_owned(username: String) -> Result<Self, UserValidationError> {
        if username.trim().is_empty() {
            return Err(UserValidationError::EmptyUsername);
        }
        if username.chars().count() > USERNAME_MAX {
            return Err(UserValidationError::UsernameTooLong { max: USERNAME_MAX });
        }
        Ok(Self(username))
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<Username> for String {
    fn from(value: Username) -> Self {
        value.0
    }
}

impl TryFrom<String> for Username {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}

/// A persisted user.
///
/// ## Invariants
/// - `id` is positive and assigned by the store.
/// - `username` is non-empty once trimmed of whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "UserDto", into = "UserDto")]
pub struct User {
    id: UserId,
    username: Username,
}

impl User {
    /// Build a new [`User`] from validated components.
    #[must_use]
    pub const fn new(id: UserId, username: Username) -> Self {
        Self { id, username }
    }

    /// Fallible constructor from raw column values.
    pub fn try_from_parts(
        id: i32,
        username: impl Into<String>,
    ) -> Result<Self, UserValidationError> {
        Ok(Self::new(UserId::new(id)?, Username::new(username)?))
    }

    /// Store-assigned identifier.
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Username as stored.
    #[must_use]
    pub const fn username(&self) -> &Username {
        &self.username
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct UserDto {
    id: i32,
    username: String,
}

impl From<User> for UserDto {
    fn from(value: User) -> Self {
        let User { id, username } = value;
        Self {
            id: id.get(),
            username: username.into(),
        }
    }
}

impl TryFrom<UserDto> for User {
    type Error = UserValidationError;

    fn try_from(value: UserDto) -> Result<Self, Self::Error> {
        Self::try_from_parts(value.id, value.username)
    }
}

/// Constraint applied when enumerating users.
///
/// # Examples
/// ```
/// use users_backend::domain::{User, UsersFilter};
///
/// let user = User::try_from_parts(1, "ada").expect("valid user");
/// assert!(UsersFilter::all().matches(&user));
/// assert!(UsersFilter::by_username("ada").matches(&user));
/// assert!(!UsersFilter::by_username("Ada").matches(&user));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsersFilter {
    username: Option<String>,
}

impl UsersFilter {
    /// Match every user.
    #[must_use]
    pub const fn all() -> Self {
        Self { username: None }
    }

    /// Match users whose username equals `username` exactly.
    pub fn by_username(username: impl Into<String>) -> Self {
        Self {
            username: Some(username.into()),
        }
    }

    /// The exact username constraint, if any.
    #[must_use]
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    /// Whether `user` satisfies this filter.
    #[must_use]
    pub fn matches(&self, user: &User) -> bool {
        self.username
            .as_deref()
            .is_none_or(|expected| user.username().as_ref() == expected)
    }
}
