use tracing_subscriber::EnvFilter;

/// Env var that overrides every other log setting.
pub const LOG_ENV: &str = "PATHLABEL_LOG";

/// Installs a stderr subscriber. `PATHLABEL_LOG` wins, then `-v`, then the config level.
pub fn init_logging(verbose: u8, config_level: &str) {
    let fallback = match verbose {
        0 => config_level,
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
