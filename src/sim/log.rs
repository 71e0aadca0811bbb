use std::fmt;

/// Verbosity of topology diagnostics. Ordered so that a message is shown when
/// its level is at or below the logger's level.
#[derive(PartialEq, PartialOrd, Debug, Default, Clone, Copy)]
pub enum LogLevel {
    #[default]
    None,
    Info,
    Debug,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LogLevel::None => "NONE",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
        };
        f.write_str(name)
    }
}

impl From<u64> for LogLevel {
    fn from(ulevel: u64) -> Self {
        match ulevel {
            1 => LogLevel::Info,
            2 => LogLevel::Debug,
            _ => LogLevel::None,
        }
    }
}

#[derive(Debug)]
pub struct Logger {
    level: LogLevel,
}

impl Logger {
    pub fn new(ulevel: u64) -> Self {
        Logger {
            level: LogLevel::from(ulevel),
        }
    }

    pub fn silent() -> Self {
        Logger {
            level: LogLevel::None,
        }
    }

    pub fn enabled(&self, level: LogLevel) -> bool {
        level != LogLevel::None && level <= self.level
    }

    pub fn log(&self, level: LogLevel, args: fmt::Arguments<'_>) {
        if !self.enabled(level) {
            return;
        }
        println!("[{}] {}", level, args);
    }
}

#[macro_export]
macro_rules! log {
    // usage: log!(logger, LogLevel::Info, "router {} -> router {}", a, b)
    ($logger:expr, $level:expr, $($arg:tt)+) => {{
        $logger.log($level, format_args!($($arg)+));
    }};
}
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::sim::log::LogLevel::Info, $($arg)+);
    };
}
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::sim::log::LogLevel::Debug, $($arg)+);
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_map_from_integers() {
        assert_eq!(LogLevel::from(0), LogLevel::None);
        assert_eq!(LogLevel::from(1), LogLevel::Info);
        assert_eq!(LogLevel::from(2), LogLevel::Debug);
        assert_eq!(LogLevel::from(9), LogLevel::None);
    }

    #[test]
    fn info_logger_hides_debug() {
        let logger = Logger::new(1);
        assert!(logger.enabled(LogLevel::Info));
        assert!(!logger.enabled(LogLevel::Debug));
        assert!(!Logger::silent().enabled(LogLevel::Info));
    }
}
