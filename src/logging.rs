use tracing_subscriber::EnvFilter;

/// Initialize tracing and bridge `log` to `tracing`.
/// Safe to call more than once; later calls are ignored.
pub fn init_tracing(enable_debug: bool) {
    let _ = tracing_log::LogTracer::init();

    // Debug flag wins, then RUST_LOG, then warnings only (wgpu/winit are noisy at info)
    let env_filter = if enable_debug {
        EnvFilter::new("histoview=debug,warn")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_thread_names(false)
        .try_init()
        .ok();

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "logging initialized");
}
