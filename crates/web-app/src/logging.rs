use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};

static LOGGER: Logger = Logger;

/// # Errors
///
/// Returns an error if the logger has already been initialized.
pub fn init() -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER).map(|()| log::set_max_level(LevelFilter::Trace))
}

struct Logger;

impl log::Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Trace
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let message = record.args().to_string();
            match record.level() {
                Level::Error => gloo_console::error!(message),
                Level::Warn => gloo_console::warn!(message),
                Level::Info => gloo_console::info!(message),
                Level::Debug | Level::Trace => gloo_console::debug!(message),
            }
        }
    }

    fn flush(&self) {}
}
