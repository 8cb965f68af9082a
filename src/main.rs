use error_resolver::{ResolverChain, Sentinel, wrap};
use tracing_subscriber::EnvFilter;

#[expect(clippy::print_stdout, reason = "the demo's output is the resolved errors")]
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let errors = [
        wrap("some error", Sentinel::NotFound),
        wrap("some error", Sentinel::PermissionDenied),
        wrap("some error", Sentinel::Unknown),
    ];

    let resolver = ResolverChain::new();
    for err in errors {
        println!("{}", resolver.resolve(err));
    }
}
