use crate::rules::Category;
use crate::types::Sentinel;

/// Category the default chain assigns to an error wrapping `sentinel`.
///
/// `Unknown` has no dedicated rule and lands in the catch-all.
pub fn category_for_sentinel(sentinel: Sentinel) -> Category {
    match sentinel {
        Sentinel::NotFound => Category::NotFound,
        Sentinel::PermissionDenied => Category::PermissionDenied,
        Sentinel::Unknown => Category::Unexpected,
    }
}

/// Sentinel a category's rule matches on, or `None` for the catch-all.
pub fn sentinel_for_category(category: Category) -> Option<Sentinel> {
    match category {
        Category::NotFound => Some(Sentinel::NotFound),
        Category::PermissionDenied => Some(Sentinel::PermissionDenied),
        Category::Unexpected => None,
    }
}
