use std::error::Error as StdError;

use crate::resolution::resolvers::ErrorResolver;
use crate::rules::Category;
use crate::types::{Sentinel, is_sentinel};

#[derive(Debug)]
pub struct PermissionDeniedResolver;

impl ErrorResolver for PermissionDeniedResolver {
    fn category(&self) -> Category {
        Category::PermissionDenied
    }

    fn is_error(&self, err: &(dyn StdError + 'static)) -> bool {
        is_sentinel(err, Sentinel::PermissionDenied)
    }
}
