use std::error::Error as StdError;

use crate::resolution::resolvers::ErrorResolver;
use crate::rules::Category;
use crate::types::{Sentinel, is_sentinel};

#[derive(Debug)]
pub struct NotFoundResolver;

impl ErrorResolver for NotFoundResolver {
    fn category(&self) -> Category {
        Category::NotFound
    }

    fn is_error(&self, err: &(dyn StdError + 'static)) -> bool {
        is_sentinel(err, Sentinel::NotFound)
    }
}
