use super::*;

pub(crate) fn logs_enabled() -> bool {
    env::var_os("RUST_LOG").is_some()
}

pub(crate) fn init() -> Option<tracing_appender::non_blocking::WorkerGuard> {
    if !logs_enabled() {
        return None;
    }

    let (writer, guard) = non_blocking(io::stderr());

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(writer)
                .with_filter(EnvFilter::from_default_env()),
        )
        .init();

    Some(guard)
}
