use std::sync::OnceLock;
use chrono::Local;

static LOGGER: OnceLock<Logger> = OnceLock::new();

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub struct Logger {
    prefix: Option<String>,
}

impl Logger {
    fn new(prefix: Option<String>) -> Self {
        Self { prefix }
    }

    pub fn log(&self, message: &str) {
        let timestamp = Local::now().format(TIMESTAMP_FORMAT).to_string();
        for line in message.lines() {
            println!("{}", format_line(&timestamp, self.prefix.as_deref(), line));
        }
    }
}

/// Multi-line messages (rendered boards) get one stamped line each.
fn format_line(timestamp: &str, prefix: Option<&str>, line: &str) -> String {
    match prefix {
        Some(prefix) => format!("[{}][{}] {}", timestamp, prefix, line),
        None => format!("[{}] {}", timestamp, line),
    }
}

/// Returns false when a logger was already installed; the first prefix wins.
pub fn init_logger(prefix: Option<String>) -> bool {
    let mut installed = false;
    LOGGER.get_or_init(|| {
        installed = true;
        Logger::new(prefix)
    });
    installed
}

pub fn log(message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.log(message);
    } else {
        eprintln!("Logger not initialized! Call init_logger() first.");
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log(&format!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line_with_prefix() {
        assert_eq!(
            format_line("2026-01-02 03:04:05", Some("Solver"), "best move 1 1"),
            "[2026-01-02 03:04:05][Solver] best move 1 1"
        );
    }

    #[test]
    fn test_format_line_without_prefix() {
        assert_eq!(
            format_line("2026-01-02 03:04:05", None, "X.O"),
            "[2026-01-02 03:04:05] X.O"
        );
    }

    #[test]
    fn test_second_init_is_ignored() {
        init_logger(Some("first".to_string()));
        assert!(!init_logger(Some("second".to_string())));
        log!("logger ready: {}", true);
    }
}
