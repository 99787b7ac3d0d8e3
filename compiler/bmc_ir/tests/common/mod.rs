//! Shared helpers for integration tests.

use std::sync::Once;

use bmc_ir::Type;

static TRACING_INIT: Once = Once::new();

/// Install a tracing subscriber once per test binary.
///
/// Enable with `RUST_LOG=bmc_ir=debug` to see rejected constructions.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_test_writer().with_target(true))
                .with(filter)
                .init();
        }
    });
}

/// `unsignedbv` of the given width.
pub fn uint(width: u32) -> Type {
    match Type::unsignedbv(width) {
        Ok(ty) => ty,
        Err(err) => panic!("{err}"),
    }
}
