use std::error::Error as StdError;

use crate::rules::catch_all::CatchAllResolver;
use crate::rules::not_found::NotFoundResolver;
use crate::rules::permission_denied::PermissionDeniedResolver;
use crate::rules::{Category, wrap_with_category};
use crate::types::BoxError;

/// A classifier rule: a predicate over an error plus the transform applied
/// when the predicate holds.
pub trait ErrorResolver: Sync {
    fn category(&self) -> Category;

    fn is_error(&self, err: &(dyn StdError + 'static)) -> bool;

    fn resolve_error(&self, err: BoxError) -> BoxError {
        wrap_with_category(self.category(), err)
    }

    /// `true` when `is_error` holds for every input, making any rule placed
    /// after this one unreachable.
    fn matches_everything(&self) -> bool {
        false
    }
}

/// Default rule order. New sentinel rules go before [`CatchAllResolver`].
pub const DEFAULT_RESOLVERS: &[&dyn ErrorResolver] = &[
    &NotFoundResolver,
    &PermissionDeniedResolver,
    &CatchAllResolver,
];

pub fn resolver_for(category: Category) -> &'static dyn ErrorResolver {
    match category {
        Category::NotFound => &NotFoundResolver,
        Category::PermissionDenied => &PermissionDeniedResolver,
        Category::Unexpected => &CatchAllResolver,
    }
}
