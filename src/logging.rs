use tracing_subscriber::EnvFilter;

/// Install the stderr subscriber. Stdout is reserved for the report.
pub fn init(verbose: bool) {
    let level = if verbose { "debug" } else { "error" };

    // A subscriber may already be installed when embedded; keep the existing one.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(format!("oc_migrate={level}")))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
