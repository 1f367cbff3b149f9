use std::sync::Once;

use env_logger::fmt::TimestampPrecision;

/// Filter used when neither the config nor `RUST_LOG` provides one.
pub const DEFAULT_FILTER: &str = "info";

/// Logger configuration.
///
/// `env_filter` uses `env_logger` filter syntax, e.g.
/// `"ochre_engine::layout=debug,ochre_image=warn"`, and takes precedence over
/// `RUST_LOG`.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
    /// Prefix records with a millisecond timestamp.
    pub timestamps: bool,
    /// Prefix records with their target (module path or `ochre`).
    pub show_target: bool,
}

impl LoggingConfig {
    pub fn with_filter(filter: impl Into<String>) -> Self {
        Self { env_filter: Some(filter.into()), ..Self::default() }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
            timestamps: false,
            show_target: true,
        }
    }
}

static INIT: Once = Once::new();

/// Installs `env_logger` as the global logger. Later calls are no-ops, and so
/// is the first one if the host already installed a logger.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let env = env_logger::Env::default().default_filter_or(DEFAULT_FILTER);
        let mut builder = env_logger::Builder::from_env(env);
        if let Some(filter) = &config.env_filter {
            builder.parse_filters(filter);
        }
        builder
            .write_style(config.write_style)
            .format_timestamp(config.timestamps.then_some(TimestampPrecision::Millis))
            .format_target(config.show_target);

        if builder.try_init().is_ok() {
            log::debug!("logging initialized");
        }
    });
}
