use std::sync::Once;

use log::LevelFilter;

/// How the `tincture` binary (or any other host) wants log output.
///
/// `env_filter` uses `env_logger` directives, e.g.
/// `"tincture_drawing=debug,tincture_styles=trace"`. When neither it nor
/// `RUST_LOG` is set, everything at `fallback_level` and above is shown.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub fallback_level: LevelFilter,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            fallback_level: LevelFilter::Warn,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

impl LoggingConfig {
    /// Explicit directives, taking priority over `RUST_LOG`.
    pub fn with_filter(filter: impl Into<String>) -> Self {
        Self { env_filter: Some(filter.into()), ..Self::default() }
    }

    /// Directives from a `--log` style option, if one was given.
    pub fn from_option(filter: Option<&str>) -> Self {
        filter.map(Self::with_filter).unwrap_or_default()
    }

    fn directives(&self) -> Option<String> {
        self.env_filter
            .clone()
            .or_else(|| std::env::var("RUST_LOG").ok())
            .filter(|f| !f.trim().is_empty())
    }
}

static INIT: Once = Once::new();

/// Installs the `env_logger` backend on first call; later calls do nothing.
///
/// A logger installed by the host beforehand is left in place.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();
        match config.directives() {
            Some(filter) => builder.parse_filters(&filter),
            None => builder.filter_level(config.fallback_level),
        };
        builder.write_style(config.write_style);

        if builder.try_init().is_ok() {
            log::debug!("tincture logging ready");
        }
    });
}
