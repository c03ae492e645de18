//! Logging setup and module-gated logging macros.
//!
//! The host calls [`init_logging`] once at startup. Modules that want a
//! local off switch define `const ENABLE_LOGS: bool` and log through the
//! macros below, which are exported at the crate root:
//!
//! ```ignore
//! const ENABLE_LOGS: bool = true;
//! use crate::{log_info, log_warn};
//!
//! log_info!("Loaded {} observations", count);
//! ```

/// Install `env_logger`, honoring `RUST_LOG` and defaulting to `info`.
/// Calling it again after a logger is installed does nothing.
pub fn init_logging() {
    let _ = env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .try_init();
}

#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        if ENABLE_LOGS {
            log::info!($($arg)*);
        }
    };
}

#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        if ENABLE_LOGS {
            log::warn!($($arg)*);
        }
    };
}

#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        if ENABLE_LOGS {
            log::error!($($arg)*);
        }
    };
}
