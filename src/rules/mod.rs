pub mod catch_all;
pub mod not_found;
pub mod permission_denied;

use crate::types::{BoxError, wrap};

/// Outcome category a resolver assigns to an error.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    serde::Serialize,
    serde::Deserialize,
    strum_macros::EnumString,
    strum_macros::IntoStaticStr,
    strum_macros::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Category {
    NotFound,
    PermissionDenied,
    Unexpected,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    /// User-facing prefix placed in front of the resolved error.
    pub fn message(self) -> &'static str {
        match self {
            Self::NotFound => "resource not found",
            Self::PermissionDenied => "permission denied",
            Self::Unexpected => "unexpected error occurred",
        }
    }
}

/// Wrap `err` as `"<category message>: <err>"`, keeping `err` as the cause.
pub fn wrap_with_category(category: Category, err: BoxError) -> BoxError {
    wrap(category.message(), err)
}
