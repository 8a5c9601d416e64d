//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

/// Installs the global fmt subscriber, writing to stderr.
///
/// `RUST_LOG` takes precedence; otherwise `verbose` selects debug output for
/// the assetcheck crates.
pub fn init(verbose: bool) {
    let env_filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if verbose {
        EnvFilter::new("assetcheck_naming=debug,assetcheck_cli=debug")
    } else {
        EnvFilter::new("assetcheck_naming=warn,assetcheck_cli=warn")
    };

    // Ignore the error if a subscriber is already installed (e.g., in tests).
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}
