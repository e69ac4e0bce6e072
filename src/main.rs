use tracing_subscriber::EnvFilter;

use learn_go::{vars, DemoError};

fn main() -> Result<(), DemoError> {
    // Logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    vars::run()
}
