//! Optional log output for hosts that have no tracing subscriber of their own.

use std::ffi::c_int;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::{STIMRT_FALSE, STIMRT_TRUE};

/// Environment variable holding an `EnvFilter` directive, e.g. `stimrt_bits=debug`.
pub const LOG_ENV_VAR: &str = "STIMRT_LOG";

fn default_directive(verbosity: c_int) -> &'static str {
    match verbosity {
        i32::MIN..=0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install a stderr subscriber.
///
/// `STIMRT_LOG` wins when set; otherwise `verbosity` picks the level
/// (`0` warn, `1` info, `2` debug, `3+` trace). Returns `0` when a global
/// subscriber is already installed.
#[unsafe(no_mangle)]
pub extern "C" fn stimrt_init_logging(verbosity: c_int) -> c_int {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true),
        )
        .try_init();

    if installed.is_ok() {
        STIMRT_TRUE
    } else {
        STIMRT_FALSE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(default_directive(-3), "warn");
        assert_eq!(default_directive(0), "warn");
        assert_eq!(default_directive(1), "info");
        assert_eq!(default_directive(2), "debug");
        assert_eq!(default_directive(9), "trace");
    }

    #[test]
    fn test_second_install_is_refused() {
        // Unit tests share one process, so only the first install can win.
        let first = stimrt_init_logging(0);
        let second = stimrt_init_logging(0);
        assert!(first == STIMRT_TRUE || first == STIMRT_FALSE);
        assert_eq!(second, STIMRT_FALSE);
    }
}
