//! Logging setup.

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Initializes the global logger.
///
/// When `verbose` is `true`, debug messages (spawns, culls) are printed;
/// otherwise only info level and above. Honors `RUST_LOG` when set.
pub fn init(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let env = Env::default().default_filter_or(level.to_string());
    let mut builder = Builder::from_env(env);

    // try_init only fails if a logger was already set; hosts and tests may
    // both call init, so ignore that case.
    let _ = builder.try_init();
}
