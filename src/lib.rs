#![cfg_attr(
    not(test),
    deny(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::dbg_macro,
        clippy::print_stdout,
        clippy::print_stderr,
        clippy::panic,
    )
)]

pub mod error;
pub mod resolution;
pub mod rules;
pub mod types;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::Error;
pub use resolution::mapping::{category_for_sentinel, sentinel_for_category};
pub use resolution::resolvers::{DEFAULT_RESOLVERS, ErrorResolver, resolver_for};
pub use resolution::{ResolutionReport, ResolverChain};
pub use rules::catch_all::CatchAllResolver;
pub use rules::not_found::NotFoundResolver;
pub use rules::permission_denied::PermissionDeniedResolver;
pub use rules::{Category, wrap_with_category};
pub use types::{
    BoxError, Causes, Sentinel, WrappedError, causes, is_sentinel, parse_sentinel, root_cause,
    wrap,
};
