use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;

use crate::settings::Config;

/// Install the global subscriber. With `log_dir` set, logs go to a daily
/// rolling `app.log` there; the returned guard must live until shutdown.
pub fn init_logging(config: &Config) -> Option<WorkerGuard> {
    let log_level = Level::DEBUG;
    match &config.log_dir {
        // Logging to File
        Some(log_dir) => {
            let file_appender = tracing_appender::rolling::daily(log_dir, "app.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            tracing_subscriber::fmt()
                .with_writer(non_blocking)
                .with_max_level(log_level)
                .with_ansi(false)
                .init();
            Some(guard)
        }
        // Logging to Console
        None => {
            tracing_subscriber::fmt().with_max_level(log_level).init();
            None
        }
    }
}
