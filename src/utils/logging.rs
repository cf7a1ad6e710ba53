// ============================================================================
// Logging Bootstrap
// Installs a tracing-subscriber fmt layer for binaries and demos
// ============================================================================

use tracing::Level;

/// Install a global `fmt` subscriber filtered at `level`.
///
/// Returns `false` if a global subscriber was already installed, in which
/// case the existing one stays in place.
pub fn init_logging(level: Level) -> bool {
    let installed = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!("Logging initialised at {}", level);
    }
    installed
}
