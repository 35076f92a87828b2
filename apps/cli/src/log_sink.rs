use traderfx_core::logging::LogSink;

/// Routes normalizer lines into the tracing subscriber.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingLogSink;

impl LogSink for TracingLogSink {
    fn log(&self, level: log::Level, message: &str) {
        match level {
            log::Level::Error => tracing::error!(target: "traderfx", "{}", message),
            log::Level::Warn => tracing::warn!(target: "traderfx", "{}", message),
            log::Level::Info => tracing::info!(target: "traderfx", "{}", message),
            log::Level::Debug => tracing::debug!(target: "traderfx", "{}", message),
            log::Level::Trace => tracing::trace!(target: "traderfx", "{}", message),
        }
    }
}
