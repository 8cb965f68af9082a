use std::error::Error as StdError;
use std::fmt;

use crate::error::Error;

/// Owned, thread-safe error value flowing through the resolver chain.
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// Process-wide identity markers matched by the classifier rules.
///
/// Matching is done by downcasting links of a cause chain and comparing
/// variants, never by comparing display text.
#[derive(
    thiserror::Error,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum_macros::EnumString,
    strum_macros::IntoStaticStr,
    strum_macros::EnumIter,
)]
#[strum(serialize_all = "snake_case")]
pub enum Sentinel {
    #[error("not found")]
    NotFound,
    #[error("permission denied")]
    PermissionDenied,
    #[error("unknown error")]
    Unknown,
}

impl Sentinel {
    /// Stable snake_case identifier, e.g. `"not_found"`.
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

pub fn parse_sentinel(name: &str) -> Result<Sentinel, Error> {
    name.parse::<Sentinel>().map_err(|_| Error::Parse {
        reason: format!("unknown sentinel: {name}"),
    })
}

/// An error with a contextual message attached to its cause.
///
/// Displays as `"<context>: <cause>"` so the rendered text carries the
/// whole chain, and exposes the cause through [`StdError::source`].
/// Rendering and dropping walk nested `WrappedError`s in a loop, so chains
/// of any depth neither recurse nor grow the stack.
pub struct WrappedError {
    context: String,
    /// Always `Some` outside of `drop`.
    source: Option<BoxError>,
}

impl WrappedError {
    pub fn new(context: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self {
            context: context.into(),
            source: Some(source.into()),
        }
    }

    pub fn context(&self) -> &str {
        &self.context
    }

    pub fn into_source(mut self) -> Option<BoxError> {
        self.source.take()
    }
}

impl fmt::Display for WrappedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut current = self;
        loop {
            f.write_str(&current.context)?;
            let Some(source) = current.source.as_deref() else {
                return Ok(());
            };
            f.write_str(": ")?;
            match source.downcast_ref::<WrappedError>() {
                Some(inner) => current = inner,
                None => return write!(f, "{source}"),
            }
        }
    }
}

impl fmt::Debug for WrappedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WrappedError")
            .field("context", &self.context)
            .field("message", &self.to_string())
            .finish()
    }
}

impl StdError for WrappedError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        let source: &(dyn StdError + 'static) = self.source.as_deref()?;
        Some(source)
    }
}

impl Drop for WrappedError {
    fn drop(&mut self) {
        let mut next = self.source.take();
        while let Some(err) = next {
            next = match err.downcast::<WrappedError>() {
                Ok(mut inner) => inner.source.take(),
                Err(_) => None,
            };
        }
    }
}

/// Attach `context` to `cause`, boxed and ready for [`crate::ResolverChain::resolve`].
pub fn wrap(context: impl Into<String>, cause: impl Into<BoxError>) -> BoxError {
    Box::new(WrappedError::new(context, cause))
}

/// Iterator over an error and each of its causes, outermost first.
///
/// A `std::io::Error` carrying a custom payload yields that payload as its
/// next link, since `io::Error::source` skips it.
pub struct Causes<'a> {
    next: Option<&'a (dyn StdError + 'static)>,
}

impl<'a> Iterator for Causes<'a> {
    type Item = &'a (dyn StdError + 'static);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = match current
            .downcast_ref::<std::io::Error>()
            .and_then(std::io::Error::get_ref)
        {
            Some(payload) => {
                let payload: &'a (dyn StdError + 'static) = payload;
                Some(payload)
            }
            None => current.source(),
        };
        Some(current)
    }
}

pub fn causes<'a>(err: &'a (dyn StdError + 'static)) -> Causes<'a> {
    Causes { next: Some(err) }
}

pub fn root_cause<'a>(err: &'a (dyn StdError + 'static)) -> &'a (dyn StdError + 'static) {
    causes(err).last().unwrap_or(err)
}

/// Whether `target` appears anywhere in the cause chain of `err`, at any depth.
pub fn is_sentinel(err: &(dyn StdError + 'static), target: Sentinel) -> bool {
    causes(err).any(|link| link.downcast_ref::<Sentinel>() == Some(&target))
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "test assertions")]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    fn nest(depth: usize, sentinel: Sentinel) -> BoxError {
        let mut err: BoxError = Box::new(sentinel);
        for level in 0..depth {
            err = wrap(format!("layer {level}"), err);
        }
        err
    }

    #[test]
    fn sentinel_display_messages() {
        assert_eq!(Sentinel::NotFound.to_string(), "not found");
        assert_eq!(Sentinel::PermissionDenied.to_string(), "permission denied");
        assert_eq!(Sentinel::Unknown.to_string(), "unknown error");
    }

    #[test]
    fn sentinel_identifier_roundtrip() {
        for sentinel in Sentinel::iter() {
            assert_eq!(parse_sentinel(sentinel.as_str()).unwrap(), sentinel);
        }
        assert_eq!(Sentinel::PermissionDenied.as_str(), "permission_denied");
    }

    #[test]
    fn parse_sentinel_rejects_unknown_names() {
        let err = parse_sentinel("timeout").unwrap_err();
        assert!(matches!(err, Error::Parse { .. }));
        assert_eq!(err.to_string(), "parse error: unknown sentinel: timeout");
    }

    #[test]
    fn wrap_displays_context_then_cause() {
        let err = wrap("some error", Sentinel::NotFound);
        assert_eq!(err.to_string(), "some error: not found");

        let nested = wrap("outer", wrap("inner", Sentinel::Unknown));
        assert_eq!(nested.to_string(), "outer: inner: unknown error");
    }

    #[test]
    fn is_sentinel_matches_by_identity_not_text() {
        let err = wrap("some error", Sentinel::PermissionDenied);
        assert!(is_sentinel(&*err, Sentinel::PermissionDenied));
        assert!(!is_sentinel(&*err, Sentinel::NotFound));

        let lookalike = wrap("some error", "permission denied");
        assert!(!is_sentinel(&*lookalike, Sentinel::PermissionDenied));
    }

    #[test]
    fn is_sentinel_matches_bare_sentinel() {
        let err: BoxError = Box::new(Sentinel::Unknown);
        assert!(is_sentinel(&*err, Sentinel::Unknown));
    }

    #[test]
    fn is_sentinel_walks_arbitrary_depth() {
        for depth in 0..64 {
            let err = nest(depth, Sentinel::NotFound);
            assert!(is_sentinel(&*err, Sentinel::NotFound), "depth {depth}");
            assert!(!is_sentinel(&*err, Sentinel::Unknown), "depth {depth}");
            assert_eq!(causes(&*err).count(), depth + 1);
        }
    }

    #[test]
    fn deep_chain_displays_and_drops_without_recursing() {
        let err = nest(100_000, Sentinel::NotFound);
        let rendered = err.to_string();
        assert!(rendered.starts_with("layer 99999: layer 99998: "));
        assert!(rendered.ends_with("layer 1: layer 0: not found"));
        assert!(is_sentinel(&*err, Sentinel::NotFound));
        drop(err);
    }

    #[test]
    fn wrapped_error_debug_shows_rendered_message() {
        let err = WrappedError::new("outer", WrappedError::new("inner", Sentinel::Unknown));
        let debug = format!("{err:?}");
        assert!(debug.contains("outer: inner: unknown error"));
    }

    #[test]
    fn io_error_payload_is_part_of_the_chain() {
        let err = wrap("some error", std::io::Error::other(Sentinel::PermissionDenied));
        assert!(is_sentinel(&*err, Sentinel::PermissionDenied));
        assert_eq!(causes(&*err).count(), 3);
        assert_eq!(
            root_cause(&*err).downcast_ref::<Sentinel>(),
            Some(&Sentinel::PermissionDenied)
        );
    }

    #[test]
    fn root_cause_is_innermost_link() {
        let err = nest(5, Sentinel::PermissionDenied);
        let root = root_cause(&*err);
        assert_eq!(
            root.downcast_ref::<Sentinel>(),
            Some(&Sentinel::PermissionDenied)
        );
    }

    #[test]
    fn wrapped_error_exposes_parts() {
        let wrapped = WrappedError::new("ctx", Sentinel::NotFound);
        assert_eq!(wrapped.context(), "ctx");
        let source = wrapped.into_source().unwrap();
        assert_eq!(
            source.downcast_ref::<Sentinel>(),
            Some(&Sentinel::NotFound)
        );
    }
}
