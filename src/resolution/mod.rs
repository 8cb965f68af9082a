pub mod mapping;
pub mod resolvers;

use std::error::Error as StdError;

use crate::resolution::resolvers::{DEFAULT_RESOLVERS, ErrorResolver};
use crate::rules::Category;
use crate::types::{BoxError, causes};

/// Serializable summary of one resolution.
///
/// `category` is a display label for reports and bindings. Resolved errors
/// carry no code of their own; callers inspect them through the cause chain.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ResolutionReport {
    /// Category of the rule that fired, `None` when the error passed through unchanged.
    pub category: Option<Category>,
    /// Display text of the resolved error.
    pub message: String,
    /// Display text of every link of the resolved error, outermost first.
    pub chain: Vec<String>,
}

/// Ordered, first-match-wins dispatch over a fixed list of [`ErrorResolver`]s.
///
/// The order is fixed at construction. A rule that matches everything
/// shadows every rule after it; see [`ResolverChain::shadowed`].
#[derive(Clone, Copy)]
pub struct ResolverChain {
    resolvers: &'static [&'static dyn ErrorResolver],
}

impl Default for ResolverChain {
    fn default() -> Self {
        Self::new()
    }
}

impl ResolverChain {
    pub const fn new() -> Self {
        Self::with_resolvers(DEFAULT_RESOLVERS)
    }

    pub const fn with_resolvers(resolvers: &'static [&'static dyn ErrorResolver]) -> Self {
        Self { resolvers }
    }

    pub fn categories(&self) -> Vec<Category> {
        self.resolvers.iter().map(|r| r.category()).collect()
    }

    fn find(&self, err: &(dyn StdError + 'static)) -> Option<&'static dyn ErrorResolver> {
        self.resolvers.iter().copied().find(|r| r.is_error(err))
    }

    /// Category of the first rule matching `err`, without transforming it.
    pub fn classify(&self, err: &(dyn StdError + 'static)) -> Option<Category> {
        self.find(err).map(|r| r.category())
    }

    /// Apply the first matching rule's transform, or hand `err` back unchanged
    /// when no rule matches.
    pub fn resolve(&self, err: impl Into<BoxError>) -> BoxError {
        let err = err.into();
        match self.find(&*err) {
            Some(resolver) => {
                tracing::debug!(category = resolver.category().as_str(), "resolved error");
                resolver.resolve_error(err)
            }
            None => {
                tracing::trace!(error = %err, "no resolver matched");
                err
            }
        }
    }

    pub fn report(&self, err: impl Into<BoxError>) -> ResolutionReport {
        let err = err.into();
        let category = self.classify(&*err);
        let resolved = self.resolve(err);
        ResolutionReport {
            category,
            message: resolved.to_string(),
            chain: causes(&*resolved).map(|link| link.to_string()).collect(),
        }
    }

    /// Categories of rules that can never fire because an earlier rule
    /// matches everything.
    pub fn shadowed(&self) -> Vec<Category> {
        match self.resolvers.iter().position(|r| r.matches_everything()) {
            Some(idx) => self.resolvers[idx + 1..]
                .iter()
                .map(|r| r.category())
                .collect(),
            None => Vec::new(),
        }
    }
}
