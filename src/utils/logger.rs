use tracing_subscriber::fmt;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const QUIET_FILTER: &str = "turtle_island=info";
const VERBOSE_FILTER: &str = "turtle_island=debug,info";

/// `RUST_LOG` wins over the built-in directives.
fn env_filter(default_directives: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives))
}

fn plain_layer<S>() -> fmt::Layer<S> {
    fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
}

pub fn init_cli_logger(verbose: bool) {
    let directives = if verbose { VERBOSE_FILTER } else { QUIET_FILTER };

    tracing_subscriber::registry()
        .with(env_filter(directives))
        .with(plain_layer().compact())
        .init();
}

/// JSON lines for log shippers; selected with `--log-format json`.
pub fn init_json_logger() {
    tracing_subscriber::registry()
        .with(env_filter(QUIET_FILTER))
        .with(plain_layer().json())
        .init();
}

