//! Global logger installation.
//!
//! Installed once per process. On Android, events go to logcat through
//! `android_logger`: with no `tracing` subscriber set, `tracing`'s `log`
//! feature forwards each event as a `log` record. Elsewhere a
//! `tracing-subscriber` fmt layer writes to stderr.
//!
//! Level priority is `RUST_LOG` (not on Android), then `RUST_LOG_LEVEL`
//! (plain level, e.g. "debug"), then the level from [`LogConfig`].

use crate::{LogConfig, Result};

/// Environment variable holding a plain level, checked after `RUST_LOG`.
pub const LOG_LEVEL_ENV: &str = "RUST_LOG_LEVEL";

/// Tag shown in logcat.
pub const LOGCAT_TAG: &str = "roboplatform";

/// Install the global logger.
///
/// Returns `Ok(true)` when this call installed it and `Ok(false)` when a
/// logger was already present.
pub fn init(config: &LogConfig) -> Result<bool> {
    config.validate()?;

    let effective = match std::env::var(LOG_LEVEL_ENV) {
        Ok(level) => LogConfig {
            level,
            ..config.clone()
        },
        Err(_) => config.clone(),
    };

    let installed = install(&effective, config);
    if installed {
        tracing::debug!(level = %effective.level, "logger installed");
    }
    Ok(installed)
}

/// Install the global logger with default settings.
pub fn init_default() -> bool {
    init(&LogConfig::default()).unwrap_or(false)
}

#[cfg(not(target_os = "android"))]
fn install(effective: &LogConfig, config: &LogConfig) -> bool {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let fallback = config.level.trim().to_lowercase();
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(effective.level.trim().to_lowercase()))
        .unwrap_or_else(|_| EnvFilter::new(&fallback));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(config.with_target).without_time())
        .try_init()
        .is_ok()
}

#[cfg(target_os = "android")]
fn install(effective: &LogConfig, config: &LogConfig) -> bool {
    use std::sync::OnceLock;

    static INSTALLED: OnceLock<()> = OnceLock::new();

    let max_level = effective
        .log_level_filter()
        .or_else(|_| config.log_level_filter())
        .unwrap_or(log::LevelFilter::Info);

    let mut installed = false;
    INSTALLED.get_or_init(|| {
        android_logger::init_once(
            android_logger::Config::default()
                .with_max_level(max_level)
                .with_tag(LOGCAT_TAG),
        );
        installed = true;
    });
    installed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        init_default();
        assert!(!init(&LogConfig::default()).unwrap());
    }

    #[test]
    fn test_init_rejects_bad_level() {
        let config = LogConfig {
            level: "chatty".into(),
            with_target: true,
        };
        assert!(init(&config).is_err());
    }
}
