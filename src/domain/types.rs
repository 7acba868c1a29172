//! Strongly-typed value objects used by the lookup pipeline.
//!
//! These wrappers enforce basic invariants (non-empty identifiers, absolute
//! base urls) so that once a value reaches the repository layer it can be
//! treated as trusted.
use std::fmt::{Debug, Display, Formatter};
use std::ops::Deref;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::ValidateUrl;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
    /// Provided url failed format validation.
    #[error("invalid url address")]
    InvalidUrl,
    /// Provided value failed custom validation.
    #[error("invalid value: {0}")]
    InvalidValue(String),
}

/// Trims whitespace and rejects empty inputs.
fn non_empty<S: Into<String>>(value: S) -> Result<String, TypeConstraintError> {
    let trimmed = value.into().trim().to_string();
    if trimmed.is_empty() {
        return Err(TypeConstraintError::EmptyString);
    }
    Ok(trimmed)
}

macro_rules! non_empty_string_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(String);

        impl $name {
            /// Constructs a trimmed, non-empty value.
            pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
                Ok(Self(non_empty(value)?))
            }

            /// Borrow the value as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the wrapper and return the owned string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Deref for $name {
            type Target = str;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

non_empty_string_newtype!(
    DatabaseId,
    "Identifier of the Notion database queried for profiles."
);

non_empty_string_newtype!(
    WorkspaceName,
    "Notion workspace slug used as the first path segment of profile urls."
);

non_empty_string_newtype!(
    FilterProperty,
    "Database property the search term is matched against."
);

/// Opaque Notion page identifier, kept byte-for-byte as returned by the API.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct PageId(String);

impl PageId {
    /// Rejects blank identifiers without rewriting the value.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(TypeConstraintError::EmptyString);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for PageId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Integration token sent as the bearer credential.
///
/// `Debug` is redacted so the secret never ends up in logs.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiToken(String);

impl ApiToken {
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let token = non_empty(value)?;
        if token.contains(char::is_whitespace) {
            return Err(TypeConstraintError::InvalidValue(
                "token must not contain whitespace".to_string(),
            ));
        }
        Ok(Self(token))
    }

    /// Borrow the raw secret.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl Debug for ApiToken {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiToken(***)")
    }
}

/// Absolute http(s) url without a trailing slash, used as a prefix for
/// building request and profile urls.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct BaseUrl(String);

impl BaseUrl {
    /// Validates the url and strips trailing slashes.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let url = non_empty(value)?;
        let url = url.trim_end_matches('/').to_string();

        let has_scheme = url.starts_with("http://") || url.starts_with("https://");
        if !has_scheme || !url.validate_url() {
            return Err(TypeConstraintError::InvalidUrl);
        }
        Ok(Self(url))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Appends path segments separated by `/`.
    pub fn join<'a, I>(&self, segments: I) -> String
    where
        I: IntoIterator<Item = &'a str>,
    {
        segments
            .into_iter()
            .fold(self.0.clone(), |mut url, segment| {
                url.push('/');
                url.push_str(segment.trim_matches('/'));
                url
            })
    }
}

impl Display for BaseUrl {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for BaseUrl {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for BaseUrl {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
