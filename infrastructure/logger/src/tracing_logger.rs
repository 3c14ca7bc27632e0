use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// Forwards use-case log lines to `tracing` under the `online_shop` target.
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "online_shop", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "online_shop", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "online_shop", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "online_shop", "{}", message);
    }
}
