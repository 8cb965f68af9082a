use std::error::Error as StdError;

use crate::resolution::resolvers::ErrorResolver;
use crate::rules::Category;

/// Matches every error. Must stay last in any chain; rules after it never run.
#[derive(Debug)]
pub struct CatchAllResolver;

impl ErrorResolver for CatchAllResolver {
    fn category(&self) -> Category {
        Category::Unexpected
    }

    fn is_error(&self, _err: &(dyn StdError + 'static)) -> bool {
        true
    }

    fn matches_everything(&self) -> bool {
        true
    }
}
