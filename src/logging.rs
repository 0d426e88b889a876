//! Logger initialization.
//!
//! Library code logs through the `log` facade; the binary installs
//! `env_logger` once at startup. `RUST_LOG` takes precedence over the
//! verbosity flag.

use std::sync::Once;

static INIT: Once = Once::new();

/// Map a `-v` count to a level filter.
pub fn level_for(verbose: u8) -> log::LevelFilter {
    match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    }
}

/// Initialize the global logger. Later calls are ignored.
pub fn init_logging(verbose: u8) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            builder.filter_level(level_for(verbose));
        }

        builder.format_timestamp(None);
        // another logger may already be installed when embedded
        let _ = builder.try_init();

        log::debug!("logging initialized");
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for() {
        assert_eq!(level_for(0), log::LevelFilter::Warn);
        assert_eq!(level_for(1), log::LevelFilter::Debug);
        assert_eq!(level_for(4), log::LevelFilter::Trace);
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init_logging(0);
        init_logging(2);
    }
}
