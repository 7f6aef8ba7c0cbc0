use tracing::Level;

/// Map config `log_level` to a tracing level, unknown values mean info
pub fn level(log_level: u8) -> Level {
    match log_level {
        0 => Level::TRACE,
        1 => Level::DEBUG,
        2 => Level::INFO,
        3 => Level::WARN,
        4 => Level::ERROR,
        _ => Level::INFO,
    }
}

#[cfg(feature = "ssr")]
pub fn init_server_logger(log_level: u8) {
    use tracing_subscriber::{
        filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt,
    };

    tracing_subscriber::registry()
        .with(LevelFilter::from_level(level(log_level)))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Send tracing events to the browser console
pub fn init_web_logger() {
    use tracing_subscriber::{
        fmt::format::Pretty, layer::SubscriberExt, util::SubscriberInitExt,
    };
    use tracing_web::{performance_layer, MakeWebConsoleWriter};

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false) // Only partially supported across browsers
        .without_time() // std::time is not available in browsers
        .with_writer(MakeWebConsoleWriter::new());
    let perf_layer =
        performance_layer().with_details_from_fields(Pretty::default());
    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(perf_layer)
        .init();
}
